//! 분석 결과 조회 계층
//!
//! 서버 응답(문장 → 어절 → 단위)을 한 번 받아 두고 여러 방식으로 꺼내 봅니다.
//! 형태소 분석 결과([`Tagged`])와 토큰화 결과([`Tokenized`])는 모양이 같으므로
//! 순회와 출력 형식은 [`ResultView`] 하나로 처리하고, 단위별 차이는
//! [`AnalysisUnit`] 구현에 맡깁니다.
//!
//! # 사용 예시
//!
//! ```
//! use bareun::proto::AnalyzeSyntaxResponse;
//! use bareun::Tagged;
//!
//! // 빈 결과도 모든 조회가 가능합니다.
//! let tagged = Tagged::new("", None::<AnalyzeSyntaxResponse>);
//! assert!(tagged.morphs().is_empty());
//! assert!(tagged.as_json_str().is_ok());
//! ```

mod tagged;
mod tokenized;

pub use tagged::{Tagged, NOUN_TAGS, VERB_TAGS};
pub use tokenized::{Hint, Tokenized};

use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::proto::TextSpan;

/// 단위 하나를 출력한 모양
///
/// `join`/`detail` 조합에 따라 문자열 또는 튜플 모양이 됩니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Pos {
    /// 문자열 하나 (`"오늘/NNG"`, `"오늘"`)
    Text(String),
    /// (텍스트, 분류)
    Pair(String, String),
    /// (텍스트, 태그, 사전 여부, 확률)
    Detail(String, String, String, f32),
}

impl Pos {
    /// 문자열 모양이면 그 문자열
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Pos::Text(s) => Some(s),
            _ => None,
        }
    }

    /// 모든 모양에서 첫 번째 항목(원문 텍스트 또는 결합 문자열)
    pub fn head(&self) -> &str {
        match self {
            Pos::Text(s) | Pos::Pair(s, _) | Pos::Detail(s, _, _, _) => s,
        }
    }
}

/// `flatten` 여부에 따른 출력 목록
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PosList {
    Flat(Vec<Pos>),
    /// 어절마다 하나의 목록
    Nested(Vec<Vec<Pos>>),
}

impl PosList {
    /// 어절 구분을 없앤 목록
    pub fn into_flat(self) -> Vec<Pos> {
        match self {
            PosList::Flat(v) => v,
            PosList::Nested(v) => v.into_iter().flatten().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            PosList::Flat(v) => v.is_empty(),
            PosList::Nested(v) => v.is_empty(),
        }
    }
}

/// 분석 단위(형태소, 분절)가 제공해야 하는 기능
pub trait AnalysisUnit {
    /// 분류 기준 (형태소는 태그 집합, 분절은 한 글자 힌트)
    type Category: ?Sized;

    fn text(&self) -> &str;

    fn has_category(&self, category: &Self::Category) -> bool;

    /// 단위 하나를 출력합니다. 같은 입력에는 항상 같은 결과를 냅니다.
    fn format(&self, join: bool, detail: bool) -> Pos;
}

/// 문장 → 어절 → 단위 구조의 분석 결과
pub trait AnalysisResult: Default + Serialize {
    type Unit: AnalysisUnit;

    /// 서버 순서대로 어절마다 단위 목록을 돌려줍니다.
    fn tokens(&self) -> impl Iterator<Item = &[Self::Unit]> + '_;
}

/// 분석 결과 하나를 감싼 읽기 전용 뷰
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView<R> {
    phrase: String,
    result: R,
}

impl<R: AnalysisResult> Default for ResultView<R> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<R: AnalysisResult> ResultView<R> {
    /// 응답이 없으면 빈 결과(문장 0개)로 대신합니다.
    pub fn new(phrase: impl Into<String>, result: Option<R>) -> Self {
        match result {
            Some(result) => Self {
                phrase: phrase.into(),
                result,
            },
            None => Self::empty(),
        }
    }

    /// 빈 결과
    pub fn empty() -> Self {
        Self {
            phrase: String::new(),
            result: R::default(),
        }
    }

    /// 분석을 요청한 원문
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// 서버가 돌려준 메시지 그대로
    pub fn msg(&self) -> &R {
        &self.result
    }

    pub fn into_msg(self) -> R {
        self.result
    }

    /// 모든 단위를 순서대로 `selector`에 통과시킨 목록
    pub fn flatten_units<'a, T, F>(&'a self, selector: F) -> Vec<T>
    where
        F: FnMut(&'a R::Unit) -> T,
    {
        self.result.tokens().flatten().map(selector).collect()
    }

    /// 분류가 일치하는 단위들의 텍스트
    pub fn units_by_category(&self, category: &<R::Unit as AnalysisUnit>::Category) -> Vec<String> {
        self.result
            .tokens()
            .flatten()
            .filter(|u| u.has_category(category))
            .map(|u| u.text().to_string())
            .collect()
    }

    /// 전체 단위 수
    pub fn unit_count(&self) -> usize {
        self.result.tokens().map(<[_]>::len).sum()
    }

    /// 전체 어절 수
    pub fn token_count(&self) -> usize {
        self.result.tokens().count()
    }

    pub fn format_unit(unit: &R::Unit, join: bool, detail: bool) -> Pos {
        unit.format(join, detail)
    }

    /// `flatten`이면 평평한 목록, 아니면 어절마다 묶은 목록
    pub fn structured(&self, flatten: bool, join: bool, detail: bool) -> PosList {
        if flatten {
            PosList::Flat(self.flatten_units(|u| u.format(join, detail)))
        } else {
            PosList::Nested(
                self.result
                    .tokens()
                    .map(|units| units.iter().map(|u| u.format(join, detail)).collect())
                    .collect(),
            )
        }
    }

    /// JSON 객체로 변환 (키는 lowerCamelCase, 열거형은 이름)
    pub fn as_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(&self.result)?)
    }

    /// 2칸 들여쓰기 JSON 문자열. 한글은 이스케이프하지 않습니다.
    pub fn as_json_str(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.result)?)
    }

    /// JSON 문자열을 `out`에 씁니다.
    pub fn print_as_json<W: Write>(&self, mut out: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut out, &self.result)?;
        out.flush()?;
        Ok(())
    }
}

/// 구간의 텍스트, 구간이 없으면 빈 문자열
pub(crate) fn span_text(span: &Option<TextSpan>) -> &str {
    span.as_ref().map(|t| t.content.as_str()).unwrap_or("")
}
