//! tonic 기반 동기 gRPC 클라이언트
//!
//! 인스턴스마다 전용 tokio 런타임 하나와 채널 하나를 가집니다.
//! 각 호출은 채널을 복제해서 쓰므로 여러 스레드에서 동시에 불러도 됩니다.
//! 비동기 컨텍스트(다른 tokio 런타임) 안에서는 호출하면 안 됩니다.
//! 버리는 것은 어디서든 됩니다. 런타임은 기다리지 않고 백그라운드에서 종료합니다.

use tonic::client::Grpc;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::metadata::{AsciiMetadataValue, MetadataValue};
use tonic::transport::Channel;
use tonic::{Request, Status};

use super::channel::{ServiceEndpoint, CLIENT_ID, MAX_MESSAGE_LENGTH};
use super::{CustomDictionaryService, LanguageService, RevisionService};
use crate::config::ClientConfig;
use crate::error::{BareunError, Result};
use crate::proto::{
    AnalyzeSyntaxListRequest, AnalyzeSyntaxListResponse, AnalyzeSyntaxRequest,
    AnalyzeSyntaxResponse, CorrectErrorRequest, CorrectErrorResponse,
    GetCustomDictionaryListResponse, GetCustomDictionaryRequest, GetCustomDictionaryResponse,
    RemoveCustomDictionariesRequest, RemoveCustomDictionariesResponse, TokenizeRequest,
    TokenizeResponse, UpdateCustomDictionaryRequest, UpdateCustomDictionaryResponse,
};

const ANALYZE_SYNTAX: &str = "/bareun.LanguageService/AnalyzeSyntax";
const ANALYZE_SYNTAX_LIST: &str = "/bareun.LanguageService/AnalyzeSyntaxList";
const TOKENIZE: &str = "/bareun.LanguageService/Tokenize";
const CORRECT_ERROR: &str = "/bareun.RevisionService/CorrectError";
const GET_CUSTOM_DICTIONARY_LIST: &str =
    "/bareun.CustomDictionaryService/GetCustomDictionaryList";
const GET_CUSTOM_DICTIONARY: &str = "/bareun.CustomDictionaryService/GetCustomDictionary";
const UPDATE_CUSTOM_DICTIONARY: &str =
    "/bareun.CustomDictionaryService/UpdateCustomDictionary";
const REMOVE_CUSTOM_DICTIONARIES: &str =
    "/bareun.CustomDictionaryService/RemoveCustomDictionaries";

/// 바른 서버용 gRPC 전송 계층
pub struct GrpcTransport {
    // drop에서 꺼내 백그라운드 종료하기 전까지는 항상 Some
    runtime: Option<tokio::runtime::Runtime>,
    grpc: Grpc<Channel>,
    apikey: AsciiMetadataValue,
    endpoint: ServiceEndpoint,
}

impl std::fmt::Debug for GrpcTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrpcTransport")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl GrpcTransport {
    /// 설정으로 전송 계층 생성
    ///
    /// API 키가 없으면 네트워크를 쓰기 전에 실패합니다.
    /// 채널은 지연 연결이라 여기서는 서버에 접속하지 않습니다.
    pub fn connect(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let endpoint = ServiceEndpoint::from_config(config);
        let apikey = config
            .apikey()
            .parse::<AsciiMetadataValue>()
            .map_err(|e| {
                BareunError::Config(format!("API 키에 쓸 수 없는 문자가 있습니다: {}", e))
            })?;

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("bareun-grpc")
            .enable_all()
            .build()?;

        let channel = {
            let _guard = runtime.enter();
            endpoint.channel()?
        };
        let grpc = Grpc::new(channel)
            .max_decoding_message_size(MAX_MESSAGE_LENGTH)
            .max_encoding_message_size(MAX_MESSAGE_LENGTH);

        log::debug!("gRPC 채널 준비: {} (tls={})", endpoint.uri(), endpoint.secure);

        Ok(Self {
            runtime: Some(runtime),
            grpc,
            apikey,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &ServiceEndpoint {
        &self.endpoint
    }

    fn unary<Req, Res>(&self, path: &'static str, message: Req) -> std::result::Result<Res, Status>
    where
        Req: prost::Message + Send + Sync + 'static,
        Res: prost::Message + Default + Send + Sync + 'static,
    {
        let Some(runtime) = self.runtime.as_ref() else {
            return Err(Status::unavailable("gRPC 런타임이 종료되었습니다"));
        };
        let mut grpc = self.grpc.clone();
        let request = with_metadata(message, &self.apikey);
        log::debug!("gRPC 호출: {}", path);

        runtime.block_on(async move {
            grpc.ready()
                .await
                .map_err(|e| Status::unavailable(format!("Service was not ready: {}", e)))?;
            let codec = ProstCodec::default();
            let response = grpc
                .unary(request, PathAndQuery::from_static(path), codec)
                .await?;
            Ok::<Res, Status>(response.into_inner())
        })
    }
}

impl Drop for GrpcTransport {
    fn drop(&mut self) {
        // 비동기 컨텍스트 안에서 런타임을 그냥 버리면 panic이 나므로 기다리지 않고 종료
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

/// API 키와 클라이언트 식별자를 메타데이터로 붙입니다.
pub(crate) fn with_metadata<T>(message: T, apikey: &AsciiMetadataValue) -> Request<T> {
    let mut request = Request::new(message);
    let metadata = request.metadata_mut();
    metadata.insert("api-key", apikey.clone());
    metadata.insert("x-bareun-client", MetadataValue::from_static(CLIENT_ID));
    request
}

impl LanguageService for GrpcTransport {
    fn analyze_syntax(
        &self,
        req: AnalyzeSyntaxRequest,
    ) -> std::result::Result<AnalyzeSyntaxResponse, Status> {
        self.unary(ANALYZE_SYNTAX, req)
    }

    fn analyze_syntax_list(
        &self,
        req: AnalyzeSyntaxListRequest,
    ) -> std::result::Result<AnalyzeSyntaxListResponse, Status> {
        self.unary(ANALYZE_SYNTAX_LIST, req)
    }

    fn tokenize(&self, req: TokenizeRequest) -> std::result::Result<TokenizeResponse, Status> {
        self.unary(TOKENIZE, req)
    }
}

impl CustomDictionaryService for GrpcTransport {
    fn get_custom_dictionary_list(
        &self,
    ) -> std::result::Result<GetCustomDictionaryListResponse, Status> {
        self.unary(GET_CUSTOM_DICTIONARY_LIST, ())
    }

    fn get_custom_dictionary(
        &self,
        req: GetCustomDictionaryRequest,
    ) -> std::result::Result<GetCustomDictionaryResponse, Status> {
        self.unary(GET_CUSTOM_DICTIONARY, req)
    }

    fn update_custom_dictionary(
        &self,
        req: UpdateCustomDictionaryRequest,
    ) -> std::result::Result<UpdateCustomDictionaryResponse, Status> {
        self.unary(UPDATE_CUSTOM_DICTIONARY, req)
    }

    fn remove_custom_dictionaries(
        &self,
        req: RemoveCustomDictionariesRequest,
    ) -> std::result::Result<RemoveCustomDictionariesResponse, Status> {
        self.unary(REMOVE_CUSTOM_DICTIONARIES, req)
    }
}

impl RevisionService for GrpcTransport {
    fn correct_error(
        &self,
        req: CorrectErrorRequest,
    ) -> std::result::Result<CorrectErrorResponse, Status> {
        self.unary(CORRECT_ERROR, req)
    }
}
