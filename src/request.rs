//! 요청 메시지 생성
//!
//! 순수한 데이터 변환만 합니다. 원격 호출과 오류 분류는 각 서비스 객체가 맡습니다.

use crate::config::ClientConfig;
use crate::proto::{
    AnalyzeSyntaxListRequest, AnalyzeSyntaxRequest, CorrectErrorRequest, Document, EncodingType,
    TokenizeRequest, LANGUAGE_KO_KR,
};

/// 형태소 분석 옵션
///
/// 기본값은 설정([`ClientConfig`])에서 가져오고 호출마다 바꿀 수 있습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOptions {
    /// 문장 자동 분리
    pub auto_split: bool,
    /// 띄어쓰기 보정
    pub auto_spacing: bool,
    /// 붙여쓰기 보정
    pub auto_jointing: bool,
    /// 적용할 사용자 사전 이름
    pub custom_dicts: Vec<String>,
}

impl Default for TagOptions {
    fn default() -> Self {
        Self::from_config(&ClientConfig::default())
    }
}

impl TagOptions {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            auto_split: config.auto_split,
            auto_spacing: config.auto_spacing,
            auto_jointing: config.auto_jointing,
            custom_dicts: config.custom_dicts.clone(),
        }
    }

    pub fn with_auto_split(mut self, auto_split: bool) -> Self {
        self.auto_split = auto_split;
        self
    }

    pub fn with_auto_spacing(mut self, auto_spacing: bool) -> Self {
        self.auto_spacing = auto_spacing;
        self
    }

    pub fn with_auto_jointing(mut self, auto_jointing: bool) -> Self {
        self.auto_jointing = auto_jointing;
        self
    }

    pub fn with_custom_dicts<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_dicts = names.into_iter().map(Into::into).collect();
        self
    }
}

fn document(content: &str) -> Document {
    Document {
        content: content.to_string(),
        language: LANGUAGE_KO_KR.to_string(),
    }
}

pub(crate) fn analyze_syntax(content: &str, opts: &TagOptions) -> AnalyzeSyntaxRequest {
    AnalyzeSyntaxRequest {
        document: Some(document(content)),
        encoding_type: EncodingType::Utf32 as i32,
        auto_split_sentence: opts.auto_split,
        custom_domain: String::new(),
        custom_dict_names: opts.custom_dicts.clone(),
        auto_spacing: opts.auto_spacing,
        auto_jointing: opts.auto_jointing,
    }
}

/// 문장 경계를 그대로 유지하는 요청. 문장 자동 분리는 쓰지 않습니다.
pub(crate) fn analyze_syntax_list(sentences: &[String], opts: &TagOptions) -> AnalyzeSyntaxListRequest {
    AnalyzeSyntaxListRequest {
        sentences: sentences.to_vec(),
        language: LANGUAGE_KO_KR.to_string(),
        encoding_type: EncodingType::Utf32 as i32,
        custom_domain: String::new(),
        custom_dict_names: opts.custom_dicts.clone(),
        auto_spacing: opts.auto_spacing,
        auto_jointing: opts.auto_jointing,
    }
}

pub(crate) fn tokenize(content: &str, auto_split: bool) -> TokenizeRequest {
    TokenizeRequest {
        document: Some(document(content)),
        encoding_type: EncodingType::Utf32 as i32,
        auto_split_sentence: auto_split,
    }
}

pub(crate) fn correct_error(content: &str, auto_split: bool, custom_domain: &str) -> CorrectErrorRequest {
    CorrectErrorRequest {
        document: Some(document(content)),
        encoding_type: EncodingType::Utf32 as i32,
        auto_split_sentence: auto_split,
        custom_domain: custom_domain.to_string(),
    }
}
