//! 토큰화(분절) 결과

use super::{span_text, AnalysisResult, AnalysisUnit, Pos, PosList, ResultView};
use crate::proto::{Segment, SegmentSentence, TokenizeResponse};

/// 토큰화 결과
pub type Tokenized = ResultView<TokenizeResponse>;

/// 분절의 한 글자 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hint {
    /// 체언 (N)
    Noun,
    /// 용언 (V)
    Predicate,
    /// 부사 (A)
    Adverb,
    /// 기호 (S)
    Symbol,
    /// 관형사 (M)
    Prenoun,
    /// 조사 (J)
    Postposition,
    /// 감탄사 (I)
    Interjection,
    /// 어미 (E)
    Ending,
}

impl Hint {
    pub const ALL: [Hint; 8] = [
        Hint::Noun,
        Hint::Predicate,
        Hint::Adverb,
        Hint::Symbol,
        Hint::Prenoun,
        Hint::Postposition,
        Hint::Interjection,
        Hint::Ending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Hint::Noun => "N",
            Hint::Predicate => "V",
            Hint::Adverb => "A",
            Hint::Symbol => "S",
            Hint::Prenoun => "M",
            Hint::Postposition => "J",
            Hint::Interjection => "I",
            Hint::Ending => "E",
        }
    }

    pub fn from_letter(letter: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|h| h.as_str() == letter)
    }
}

impl AnalysisResult for TokenizeResponse {
    type Unit = Segment;

    fn tokens(&self) -> impl Iterator<Item = &[Segment]> + '_ {
        self.sentences
            .iter()
            .flat_map(|s| s.tokens.iter())
            .map(|t| t.segments.as_slice())
    }
}

impl AnalysisUnit for Segment {
    type Category = Hint;

    fn text(&self) -> &str {
        span_text(&self.text)
    }

    fn has_category(&self, category: &Hint) -> bool {
        self.hint == category.as_str()
    }

    fn format(&self, join: bool, detail: bool) -> Pos {
        let text = self.text().to_string();
        match (join, detail) {
            (true, true) => Pos::Text(format!("{}/{}", text, self.hint)),
            (false, true) => Pos::Pair(text, self.hint.clone()),
            (_, false) => Pos::Text(text),
        }
    }
}

impl ResultView<TokenizeResponse> {
    pub fn sentences(&self) -> &[SegmentSentence] {
        &self.msg().sentences
    }

    /// 분절 결과
    ///
    /// - `flatten`: false면 어절마다 묶어서 돌려줍니다.
    /// - `join`: `detail`과 함께 true면 `"분절/힌트"` 문자열
    /// - `detail`: true면 힌트를 포함합니다.
    pub fn seg(&self, flatten: bool, join: bool, detail: bool) -> PosList {
        self.structured(flatten, join, detail)
    }

    /// 모든 분절
    pub fn segments(&self) -> Vec<String> {
        self.flatten_units(|s| s.text().to_string())
    }

    /// 체언 추출
    pub fn nouns(&self) -> Vec<String> {
        self.units_by_category(&Hint::Noun)
    }

    /// 용언(동사, 형용사) 추출
    pub fn verbs(&self) -> Vec<String> {
        self.units_by_category(&Hint::Predicate)
    }

    pub fn predicates(&self) -> Vec<String> {
        self.verbs()
    }

    pub fn substantives(&self) -> Vec<String> {
        self.nouns()
    }

    pub fn symbols(&self) -> Vec<String> {
        self.units_by_category(&Hint::Symbol)
    }

    pub fn adverbs(&self) -> Vec<String> {
        self.units_by_category(&Hint::Adverb)
    }

    pub fn prenouns(&self) -> Vec<String> {
        self.units_by_category(&Hint::Prenoun)
    }

    pub fn postpositions(&self) -> Vec<String> {
        self.units_by_category(&Hint::Postposition)
    }

    pub fn interjections(&self) -> Vec<String> {
        self.units_by_category(&Hint::Interjection)
    }

    pub fn endings(&self) -> Vec<String> {
        self.units_by_category(&Hint::Ending)
    }
}
