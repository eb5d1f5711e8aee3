//! 바른 서버 프로토콜 메시지 정의
//!
//! 프로토콜은 서버가 소유하므로 여기서는 그대로 옮겨 적기만 합니다.
//! 모든 메시지는 `prost::Message`로 인코딩되고, JSON 변환을 위해
//! `serde::Serialize`도 구현합니다. JSON에서는 키를 lowerCamelCase로,
//! 열거형을 정수가 아닌 이름으로, 기본값도 생략하지 않고 출력합니다.

/// 열거형 필드(i32)를 이름으로 직렬화하는 함수를 만듭니다.
/// 알 수 없는 값은 숫자 그대로 내보냅니다.
macro_rules! enum_name_serializer {
    ($fn_name:ident, $enum_ty:ty) => {
        pub(crate) fn $fn_name<S>(value: &i32, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: ::serde::Serializer,
        {
            match <$enum_ty>::try_from(*value) {
                Ok(v) => serializer.serialize_str(v.as_str_name()),
                Err(_) => serializer.serialize_i32(*value),
            }
        }
    };
}

pub(crate) use enum_name_serializer;

pub mod custom_dict;
pub mod language;
pub mod revision;

pub use custom_dict::{
    CustomDictionary, CustomDictionaryMeta, DictSet, DictType, GetCustomDictionaryListResponse,
    GetCustomDictionaryRequest, GetCustomDictionaryResponse, RemoveCustomDictionariesRequest,
    RemoveCustomDictionariesResponse, UpdateCustomDictionaryRequest,
    UpdateCustomDictionaryResponse,
};
pub use language::{
    AnalyzeSyntaxListRequest, AnalyzeSyntaxListResponse, AnalyzeSyntaxRequest,
    AnalyzeSyntaxResponse, Document, EncodingType, Morpheme, OutOfVocab, Segment,
    SegmentSentence, SegmentToken, Sentence, Tag, TextSpan, Token, TokenizeRequest,
    TokenizeResponse,
};
pub use revision::{
    CorrectErrorRequest, CorrectErrorResponse, RevisedBlock, RevisedSentence, Revision,
};

/// 요청 문서의 언어 코드
pub const LANGUAGE_KO_KR: &str = "ko_KR";
