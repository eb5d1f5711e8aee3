//! 원격 서비스 호출 계층
//!
//! 서비스마다 트레이트를 하나씩 두고, 실제 gRPC 구현은 [`GrpcTransport`]가
//! 맡습니다. 각 메서드는 서버 응답 또는 gRPC 상태를 그대로 돌려주며,
//! 오류 분류는 호출한 쪽(`Tagger`, `Tokenizer` 등)에서 합니다.

mod channel;
mod grpc;

pub use channel::{ServiceEndpoint, CLIENT_ID, MAX_MESSAGE_LENGTH};
pub use grpc::GrpcTransport;

use tonic::Status;

use crate::proto::{
    AnalyzeSyntaxListRequest, AnalyzeSyntaxListResponse, AnalyzeSyntaxRequest,
    AnalyzeSyntaxResponse, CorrectErrorRequest, CorrectErrorResponse,
    GetCustomDictionaryListResponse, GetCustomDictionaryRequest, GetCustomDictionaryResponse,
    RemoveCustomDictionariesRequest, RemoveCustomDictionariesResponse, TokenizeRequest,
    TokenizeResponse, UpdateCustomDictionaryRequest, UpdateCustomDictionaryResponse,
};

/// 형태소 분석/토큰화 서비스 (`bareun.LanguageService`)
pub trait LanguageService: Send + Sync {
    fn analyze_syntax(&self, req: AnalyzeSyntaxRequest) -> Result<AnalyzeSyntaxResponse, Status>;

    /// 호출자가 나눈 문장 경계를 그대로 유지하는 분석
    fn analyze_syntax_list(
        &self,
        req: AnalyzeSyntaxListRequest,
    ) -> Result<AnalyzeSyntaxListResponse, Status>;

    fn tokenize(&self, req: TokenizeRequest) -> Result<TokenizeResponse, Status>;
}

/// 사용자 사전 서비스 (`bareun.CustomDictionaryService`)
pub trait CustomDictionaryService: Send + Sync {
    fn get_custom_dictionary_list(&self) -> Result<GetCustomDictionaryListResponse, Status>;

    fn get_custom_dictionary(
        &self,
        req: GetCustomDictionaryRequest,
    ) -> Result<GetCustomDictionaryResponse, Status>;

    fn update_custom_dictionary(
        &self,
        req: UpdateCustomDictionaryRequest,
    ) -> Result<UpdateCustomDictionaryResponse, Status>;

    fn remove_custom_dictionaries(
        &self,
        req: RemoveCustomDictionariesRequest,
    ) -> Result<RemoveCustomDictionariesResponse, Status>;
}

/// 맞춤법 교정 서비스 (`bareun.RevisionService`)
pub trait RevisionService: Send + Sync {
    fn correct_error(&self, req: CorrectErrorRequest) -> Result<CorrectErrorResponse, Status>;
}
