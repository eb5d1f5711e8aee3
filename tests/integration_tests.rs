//! 통합 테스트 - 가짜 서버로 공개 API 전체 흐름 확인

use std::collections::BTreeMap;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use bareun::proto::{
    AnalyzeSyntaxListRequest, AnalyzeSyntaxListResponse, AnalyzeSyntaxRequest,
    AnalyzeSyntaxResponse, CorrectErrorRequest, CorrectErrorResponse, CustomDictionary,
    GetCustomDictionaryListResponse, GetCustomDictionaryRequest, GetCustomDictionaryResponse,
    RemoveCustomDictionariesRequest, RemoveCustomDictionariesResponse, Segment, SegmentSentence,
    SegmentToken, TextSpan, TokenizeRequest, TokenizeResponse, UpdateCustomDictionaryRequest,
    UpdateCustomDictionaryResponse,
};
use bareun::transport::{CustomDictionaryService, LanguageService, RevisionService};
use bareun::{BareunError, ClientConfig, Corrector, DictKind, PosList, Tagger, Tokenizer};
use tonic::{Code, Status};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn span(text: &str) -> Option<TextSpan> {
    Some(TextSpan {
        content: text.to_string(),
        begin_offset: 0,
        length: text.chars().count() as i32,
    })
}

fn seg_token(text: &str, segments: &[(&str, &str)]) -> SegmentToken {
    SegmentToken {
        text: span(text),
        segments: segments
            .iter()
            .map(|(t, h)| Segment {
                text: span(t),
                hint: h.to_string(),
            })
            .collect(),
        tagged: segments
            .iter()
            .map(|(t, h)| format!("{}/{}", t, h))
            .collect::<Vec<_>>()
            .join("+"),
    }
}

#[derive(Default)]
struct MockServer {
    calls: AtomicUsize,
    failure: Mutex<Option<Code>>,
    dicts: Mutex<BTreeMap<String, CustomDictionary>>,
}

impl MockServer {
    fn enter(&self) -> Result<(), Status> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match *self.failure.lock().unwrap() {
            Some(code) => Err(Status::new(code, "")),
            None => Ok(()),
        }
    }
}

impl LanguageService for MockServer {
    fn analyze_syntax(&self, _req: AnalyzeSyntaxRequest) -> Result<AnalyzeSyntaxResponse, Status> {
        self.enter()?;
        Ok(AnalyzeSyntaxResponse::default())
    }

    fn analyze_syntax_list(
        &self,
        _req: AnalyzeSyntaxListRequest,
    ) -> Result<AnalyzeSyntaxListResponse, Status> {
        self.enter()?;
        Ok(AnalyzeSyntaxListResponse::default())
    }

    fn tokenize(&self, req: TokenizeRequest) -> Result<TokenizeResponse, Status> {
        self.enter()?;
        let content = req.document.map(|d| d.content).unwrap_or_default();
        Ok(TokenizeResponse {
            sentences: vec![SegmentSentence {
                text: span(&content),
                tokens: vec![
                    seg_token("오늘은", &[("오늘", "N"), ("은", "J")]),
                    seg_token("정말", &[("정말", "A")]),
                    seg_token("추운", &[("춥", "V"), ("ㄴ", "E")]),
                    seg_token(
                        "날이네요.",
                        &[("날", "N"), ("이", "V"), ("네", "E"), ("요", "J"), (".", "S")],
                    ),
                ],
            }],
            language: "ko_KR".to_string(),
        })
    }
}

impl CustomDictionaryService for MockServer {
    fn get_custom_dictionary_list(&self) -> Result<GetCustomDictionaryListResponse, Status> {
        self.enter()?;
        Ok(GetCustomDictionaryListResponse::default())
    }

    fn get_custom_dictionary(
        &self,
        req: GetCustomDictionaryRequest,
    ) -> Result<GetCustomDictionaryResponse, Status> {
        self.enter()?;
        let dict = self.dicts.lock().unwrap().get(&req.domain_name).cloned();
        Ok(GetCustomDictionaryResponse {
            domain_name: req.domain_name,
            dict,
        })
    }

    fn update_custom_dictionary(
        &self,
        req: UpdateCustomDictionaryRequest,
    ) -> Result<UpdateCustomDictionaryResponse, Status> {
        self.enter()?;
        self.dicts
            .lock()
            .unwrap()
            .insert(req.domain_name.clone(), req.dict.unwrap_or_default());
        Ok(UpdateCustomDictionaryResponse {
            updated_domain_name: req.domain_name,
        })
    }

    fn remove_custom_dictionaries(
        &self,
        req: RemoveCustomDictionariesRequest,
    ) -> Result<RemoveCustomDictionariesResponse, Status> {
        self.enter()?;
        let mut dicts = self.dicts.lock().unwrap();
        let deleted_domain_names = req
            .domain_names
            .into_iter()
            .map(|name| {
                let removed = dicts.remove(&name).is_some();
                (name, removed)
            })
            .collect();
        Ok(RemoveCustomDictionariesResponse {
            deleted_domain_names,
        })
    }
}

impl RevisionService for MockServer {
    fn correct_error(&self, _req: CorrectErrorRequest) -> Result<CorrectErrorResponse, Status> {
        self.enter()?;
        Ok(CorrectErrorResponse::default())
    }
}

fn config() -> ClientConfig {
    ClientConfig::new("koba-TESTKEY")
}

#[test]
fn test_tokenize_scenario() {
    init_logger();
    let tokenizer = Tokenizer::with_transport(config(), MockServer::default()).unwrap();
    let tokenized = tokenizer.tokenize("오늘은 정말 추운 날이네요.").unwrap();

    match tokenized.seg(false, false, false) {
        PosList::Nested(tokens) => {
            let counts: Vec<usize> = tokens.iter().map(Vec::len).collect();
            assert_eq!(counts, vec![2, 1, 2, 5]);
        }
        other => panic!("unexpected: {:?}", other),
    }
    assert_eq!(tokenized.nouns(), vec!["오늘", "날"]);
    assert_eq!(tokenized.adverbs(), vec!["정말"]);
    assert_eq!(tokenized.symbols(), vec!["."]);
}

#[test]
fn test_empty_credential_fails_before_network() {
    init_logger();
    let err = Tagger::with_transport(ClientConfig::new(""), MockServer::default()).unwrap_err();
    assert!(matches!(err, BareunError::Config(_)));

    // 실제 전송 계층도 접속 시도 없이 실패
    assert!(matches!(
        Tagger::new(ClientConfig::new("")),
        Err(BareunError::Config(_))
    ));
}

#[test]
fn test_empty_tag_makes_no_remote_call() {
    init_logger();
    let server = Arc::new(MockServer::default());
    let tagger = Tagger::with_shared_transport(config(), Arc::clone(&server)).unwrap();
    let tagged = tagger.tag("").unwrap();
    assert!(tagged.morphs().is_empty());
    assert!(tagged.as_json_str().is_ok());
    assert_eq!(server.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_dictionary_push_pull_round_trip() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let files = [
        ("np.txt", "# 고유명사\n코로나19\n질병관리청\n"),
        ("cp.txt", "자유의지\n\n  사회적거리두기  \n"),
        ("cp_caret.txt", "자유^의지\n"),
        ("vv.txt", "# 동사\n따라잡\n"),
        ("va.txt", "푸르\n"),
    ];
    for (name, body) in files {
        let mut f = std::fs::File::create(dir.path().join(name)).unwrap();
        f.write_all(body.as_bytes()).unwrap();
    }

    let server = Arc::new(MockServer::default());
    let mut tagger = Tagger::with_shared_transport(config(), Arc::clone(&server)).unwrap();
    let dict = tagger.custom_dict("covid").unwrap();
    dict.read_np_set_from_file(dir.path().join("np.txt")).unwrap();
    dict.read_cp_set_from_file(dir.path().join("cp.txt")).unwrap();
    dict.read_cp_caret_set_from_file(dir.path().join("cp_caret.txt")).unwrap();
    dict.read_vv_set_from_file(dir.path().join("vv.txt")).unwrap();
    dict.read_va_set_from_file(dir.path().join("va.txt")).unwrap();
    assert_eq!(dict.words(DictKind::CompoundNoun).len(), 2);
    assert!(dict.update().unwrap());

    let np = dict.words(DictKind::ProperNoun).clone();
    let cp = dict.words(DictKind::CompoundNoun).clone();

    // 다른 분석기에서 같은 사전을 내려받음
    let mut other = Tagger::with_shared_transport(config(), Arc::clone(&server)).unwrap();
    let pulled = other.custom_dict("covid").unwrap();
    pulled.load().unwrap();
    assert_eq!(pulled.words(DictKind::ProperNoun), &np);
    assert_eq!(pulled.words(DictKind::CompoundNoun), &cp);
    assert!(pulled.words(DictKind::Verb).contains("따라잡"));
    assert!(pulled.words(DictKind::CompoundNounCaret).contains("자유^의지"));

    let removed = pulled.clear().unwrap();
    assert_eq!(removed, vec!["covid"]);
}

#[test]
fn test_remote_errors_surface_classified() {
    init_logger();
    let server = Arc::new(MockServer::default());
    let tokenizer = Tokenizer::with_shared_transport(
        config().with_host("10.1.2.3").with_port(5757),
        Arc::clone(&server),
    )
    .unwrap();

    *server.failure.lock().unwrap() = Some(Code::Unavailable);
    let err = tokenizer.tokenize("오늘").unwrap_err();
    assert!(matches!(err, BareunError::UnreachableEndpoint { .. }));
    assert!(err.to_string().contains("[10.1.2.3:5757]"));

    *server.failure.lock().unwrap() = Some(Code::PermissionDenied);
    let err = tokenizer.tokenize("오늘").unwrap_err();
    assert!(err.to_string().contains("koba-TESTKEY"));

    *server.failure.lock().unwrap() = Some(Code::DeadlineExceeded);
    let err = tokenizer.tokenize("오늘").unwrap_err();
    assert_eq!(err.status().unwrap().code(), Code::DeadlineExceeded);
}

#[test]
fn test_facades_can_be_dropped_in_async_context() {
    init_logger();
    let local = config().with_host("127.0.0.1").with_port(1);
    let tagger = Tagger::new(local.clone()).unwrap();
    let tokenizer = Tokenizer::new(local.clone()).unwrap();
    let corrector = Corrector::new(local).unwrap();

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    rt.block_on(async move {
        drop(tagger);
        drop(tokenizer);
        drop(corrector);
    });
}
