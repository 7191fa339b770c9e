//! Priority keyword vocabularies.
//!
//! Two fixed sets of domain terms that outrank generically-scored embedding
//! candidates: sentiment-bearing review words and genre words. Built once,
//! read-only for the process lifetime.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Sentiment-bearing review terms (tone, verdict, craft aspects).
pub static SENTIMENT_TERMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "반전", "감동", "재미", "재밌", "몰입", "몰입감", "여운", "눈물", "웃음", "긴장",
        "긴장감", "소름", "충격", "전율", "희열", "실망", "최고", "최악", "명작", "수작",
        "졸작", "명장면", "명대사", "강추", "비추", "호평", "혹평", "지루", "신파", "유치",
        "참신", "신선", "진부", "개연성", "완성도", "연출", "연기", "열연", "영상미",
        "음악", "사운드", "각본", "스토리", "전개", "결말", "떡밥", "복선", "케미",
        "미장센", "박진감", "카타르시스",
    ]
    .into_iter()
    .collect()
});

/// Genre terms.
pub static GENRE_TERMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "액션", "코미디", "로맨스", "멜로", "드라마", "스릴러", "공포", "호러", "미스터리",
        "추리", "판타지", "무협", "느와르", "범죄", "전쟁", "역사", "사극", "시대극",
        "다큐", "다큐멘터리", "애니", "애니메이션", "뮤지컬", "가족", "청춘", "성장",
        "좀비", "히어로", "재난", "법정", "의학", "첩보", "괴수", "오컬트", "로코",
        "블록버스터", "독립영화",
    ]
    .into_iter()
    .collect()
});

/// Whether a noun belongs to either priority vocabulary.
pub fn is_priority_term(noun: &str) -> bool {
    SENTIMENT_TERMS.contains(noun) || GENRE_TERMS.contains(noun)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_terms() {
        assert!(is_priority_term("반전"));
        assert!(is_priority_term("재밌"));
        assert!(is_priority_term("연출"));
    }

    #[test]
    fn test_genre_terms() {
        assert!(is_priority_term("스릴러"));
        assert!(is_priority_term("느와르"));
    }

    #[test]
    fn test_generic_nouns_not_priority() {
        assert!(!is_priority_term("영화"));
        assert!(!is_priority_term("배우"));
        assert!(!is_priority_term("극장"));
    }

    #[test]
    fn test_vocabularies_disjoint() {
        assert!(SENTIMENT_TERMS.is_disjoint(&GENRE_TERMS));
    }
}
