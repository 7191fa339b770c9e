//! Kiwi-based morphological tagger.
//!
//! Drives the libkiwi C API through a dynamically loaded library, the same
//! way the ONNX embedder binds a system libonnxruntime. Requires the `kiwi`
//! feature, `KIWI_LIBRARY_PATH` pointing at the shared library, and
//! `KIWI_MODEL_PATH` pointing at the model directory.

#[cfg(feature = "kiwi")]
mod inner {
    use std::ffi::{c_char, c_int, CStr, CString};
    use std::os::raw::c_void;

    use hanpick_core::{Error, Result};
    use libloading::Library;
    use parking_lot::Mutex;
    use tracing::{info, warn};

    use crate::tagger::{Morpheme, PosTag, TaggerBackend};

    type KiwiHandle = *mut c_void;
    type KiwiResHandle = *mut c_void;

    type KiwiInitFn = unsafe extern "C" fn(*const c_char, c_int, c_int) -> KiwiHandle;
    type KiwiCloseFn = unsafe extern "C" fn(KiwiHandle) -> c_int;
    type KiwiAnalyzeFn =
        unsafe extern "C" fn(KiwiHandle, *const c_char, c_int, c_int) -> KiwiResHandle;
    type KiwiResSizeFn = unsafe extern "C" fn(KiwiResHandle) -> c_int;
    type KiwiResWordNumFn = unsafe extern "C" fn(KiwiResHandle, c_int) -> c_int;
    type KiwiResFormFn = unsafe extern "C" fn(KiwiResHandle, c_int, c_int) -> *const c_char;
    type KiwiResTagFn = unsafe extern "C" fn(KiwiResHandle, c_int, c_int) -> *const c_char;
    type KiwiResCloseFn = unsafe extern "C" fn(KiwiResHandle) -> c_int;
    type KiwiErrorFn = unsafe extern "C" fn() -> *const c_char;

    /// Normalization-enabled match option set.
    const KIWI_MATCH_ALL_WITH_NORMALIZING: c_int = 0x8000 | 15;

    /// Resolved libkiwi entry points.
    struct KiwiApi {
        close: KiwiCloseFn,
        analyze: KiwiAnalyzeFn,
        res_size: KiwiResSizeFn,
        res_word_num: KiwiResWordNumFn,
        res_form: KiwiResFormFn,
        res_tag: KiwiResTagFn,
        res_close: KiwiResCloseFn,
        error: KiwiErrorFn,
    }

    /// Morphological tagger backed by a once-loaded Kiwi analyzer handle.
    pub struct KiwiTagger {
        // Keeps the shared library mapped for the lifetime of the handle.
        _library: Library,
        api: KiwiApi,
        handle: Mutex<KiwiHandle>,
    }

    // The raw handle is only ever touched under the Mutex.
    unsafe impl Send for KiwiTagger {}
    unsafe impl Sync for KiwiTagger {}

    impl KiwiTagger {
        /// Load libkiwi and build an analyzer from environment configuration:
        /// `KIWI_LIBRARY_PATH` (default `libkiwi.so`) and `KIWI_MODEL_PATH`.
        pub fn load_from_env() -> Result<Self> {
            let library_path =
                std::env::var("KIWI_LIBRARY_PATH").unwrap_or_else(|_| "libkiwi.so".to_string());
            let model_path = std::env::var("KIWI_MODEL_PATH")
                .map_err(|_| Error::Tagger("KIWI_MODEL_PATH is not set".to_string()))?;
            Self::load(&library_path, &model_path)
        }

        /// Load libkiwi from `library_path` and initialize an analyzer with
        /// the model under `model_path`.
        pub fn load(library_path: &str, model_path: &str) -> Result<Self> {
            let library = unsafe { Library::new(library_path) }
                .map_err(|e| Error::Tagger(format!("Failed to load {}: {}", library_path, e)))?;

            let init: KiwiInitFn = Self::symbol(&library, b"kiwi_init\0")?;
            let api = KiwiApi {
                close: Self::symbol(&library, b"kiwi_close\0")?,
                analyze: Self::symbol(&library, b"kiwi_analyze\0")?,
                res_size: Self::symbol(&library, b"kiwi_res_size\0")?,
                res_word_num: Self::symbol(&library, b"kiwi_res_word_num\0")?,
                res_form: Self::symbol(&library, b"kiwi_res_form\0")?,
                res_tag: Self::symbol(&library, b"kiwi_res_tag\0")?,
                res_close: Self::symbol(&library, b"kiwi_res_close\0")?,
                error: Self::symbol(&library, b"kiwi_error\0")?,
            };

            let model_c = CString::new(model_path)
                .map_err(|_| Error::Tagger("model path contains a NUL byte".to_string()))?;
            let handle = unsafe { init(model_c.as_ptr(), 0, 0) };
            if handle.is_null() {
                return Err(Error::Tagger(format!(
                    "kiwi_init returned a null handle: {}",
                    Self::last_error(&api)
                )));
            }

            info!("Kiwi tagger loaded: model={}", model_path);

            Ok(Self {
                _library: library,
                api,
                handle: Mutex::new(handle),
            })
        }

        fn symbol<T: Copy>(library: &Library, name: &[u8]) -> Result<T> {
            unsafe {
                library.get::<T>(name).map(|sym| *sym).map_err(|e| {
                    Error::Tagger(format!(
                        "missing symbol {}: {}",
                        String::from_utf8_lossy(name),
                        e
                    ))
                })
            }
        }

        fn last_error(api: &KiwiApi) -> String {
            let ptr = unsafe { (api.error)() };
            if ptr.is_null() {
                "unknown error".to_string()
            } else {
                unsafe { CStr::from_ptr(ptr) }
                    .to_string_lossy()
                    .into_owned()
            }
        }

        /// Run analysis and collect the best candidate's (form, tag) pairs.
        fn analyze(&self, text: &str) -> Option<Vec<Morpheme>> {
            let text_c = CString::new(text).ok()?;

            let handle = self.handle.lock();
            let result = unsafe {
                (self.api.analyze)(*handle, text_c.as_ptr(), 1, KIWI_MATCH_ALL_WITH_NORMALIZING)
            };
            if result.is_null() {
                warn!("kiwi_analyze failed: {}", Self::last_error(&self.api));
                return None;
            }

            let mut morphemes = Vec::new();
            let candidates = unsafe { (self.api.res_size)(result) };
            if candidates > 0 {
                let token_count = unsafe { (self.api.res_word_num)(result, 0) };
                for j in 0..token_count.max(0) {
                    let form_ptr = unsafe { (self.api.res_form)(result, 0, j) };
                    let tag_ptr = unsafe { (self.api.res_tag)(result, 0, j) };
                    if form_ptr.is_null() || tag_ptr.is_null() {
                        warn!("kiwi_res_form/tag returned a null pointer");
                        break;
                    }
                    let form = unsafe { CStr::from_ptr(form_ptr) }
                        .to_string_lossy()
                        .into_owned();
                    let tag = unsafe { CStr::from_ptr(tag_ptr) }.to_string_lossy();
                    morphemes.push(Morpheme::new(form, PosTag::from_kiwi(&tag)));
                }
            }

            unsafe { (self.api.res_close)(result) };
            Some(morphemes)
        }
    }

    impl TaggerBackend for KiwiTagger {
        fn tag(&self, text: &str) -> Vec<Morpheme> {
            if text.trim().is_empty() {
                return Vec::new();
            }
            self.analyze(text).unwrap_or_default()
        }

        fn is_available(&self) -> bool {
            true
        }
    }

    impl Drop for KiwiTagger {
        fn drop(&mut self) {
            let handle = self.handle.lock();
            if !handle.is_null() {
                unsafe { (self.api.close)(*handle) };
            }
        }
    }
}

#[cfg(feature = "kiwi")]
pub use inner::KiwiTagger;
