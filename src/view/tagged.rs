//! 형태소 분석 결과

use super::{span_text, AnalysisResult, AnalysisUnit, Pos, PosList, ResultView};
use crate::proto::{AnalyzeSyntaxResponse, Morpheme, OutOfVocab, Sentence, Tag};

/// 명사로 묶는 태그 (고유 명사, 일반 명사, 대명사, 의존 명사)
pub const NOUN_TAGS: &[Tag] = &[Tag::Nnp, Tag::Nng, Tag::Np, Tag::Nnb];
/// 동사 태그
pub const VERB_TAGS: &[Tag] = &[Tag::Vv];

/// 형태소 분석 결과
pub type Tagged = ResultView<AnalyzeSyntaxResponse>;

impl AnalysisResult for AnalyzeSyntaxResponse {
    type Unit = Morpheme;

    fn tokens(&self) -> impl Iterator<Item = &[Morpheme]> + '_ {
        self.sentences
            .iter()
            .flat_map(|s| s.tokens.iter())
            .map(|t| t.morphemes.as_slice())
    }
}

fn tag_name(value: i32) -> String {
    match Tag::try_from(value) {
        Ok(tag) => tag.as_str_name().to_string(),
        Err(_) => value.to_string(),
    }
}

fn oov_name(value: i32) -> String {
    match OutOfVocab::try_from(value) {
        Ok(oov) => oov.as_str_name().to_string(),
        Err(_) => value.to_string(),
    }
}

impl AnalysisUnit for Morpheme {
    type Category = [Tag];

    fn text(&self) -> &str {
        span_text(&self.text)
    }

    fn has_category(&self, category: &[Tag]) -> bool {
        category.iter().any(|t| *t as i32 == self.tag)
    }

    fn format(&self, join: bool, detail: bool) -> Pos {
        let text = self.text();
        let tag = tag_name(self.tag);
        match (join, detail) {
            (false, false) => Pos::Pair(text.to_string(), tag),
            (false, true) => Pos::Detail(
                text.to_string(),
                tag,
                oov_name(self.out_of_vocab),
                self.probability,
            ),
            (true, false) => Pos::Text(format!("{}/{}", text, tag)),
            (true, true) => {
                let prob = if self.probability > 0.0 {
                    format!(":{:5.3}", self.probability)
                } else {
                    String::new()
                };
                let oov = if self.out_of_vocab != OutOfVocab::InWordEmbedding as i32 {
                    format!("#{}", oov_name(self.out_of_vocab))
                } else {
                    String::new()
                };
                Pos::Text(format!("{}/{}{}{}", text, tag, prob, oov))
            }
        }
    }
}

impl ResultView<AnalyzeSyntaxResponse> {
    pub fn sentences(&self) -> &[Sentence] {
        &self.msg().sentences
    }

    /// 품사 태깅 결과
    ///
    /// - `flatten`: false면 어절마다 묶어서 돌려줍니다.
    /// - `join`: true면 `"형태소/태그"` 문자열로 돌려줍니다.
    /// - `detail`: true면 확률과 사전 여부까지 포함합니다.
    pub fn pos(&self, flatten: bool, join: bool, detail: bool) -> PosList {
        self.structured(flatten, join, detail)
    }

    /// 형태소 목록
    pub fn morphs(&self) -> Vec<String> {
        self.flatten_units(|m| m.text().to_string())
    }

    /// 명사 추출
    pub fn nouns(&self) -> Vec<String> {
        self.units_by_category(NOUN_TAGS)
    }

    /// 동사 추출
    pub fn verbs(&self) -> Vec<String> {
        self.units_by_category(VERB_TAGS)
    }
}
