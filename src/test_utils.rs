//! 단위 테스트용 샘플 데이터와 가짜 전송 계층

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use tonic::{Code, Status};

use crate::error::CallContext;
use crate::proto::{
    AnalyzeSyntaxListRequest, AnalyzeSyntaxListResponse, AnalyzeSyntaxRequest,
    AnalyzeSyntaxResponse, CorrectErrorRequest, CorrectErrorResponse, CustomDictionary,
    CustomDictionaryMeta, GetCustomDictionaryListResponse, GetCustomDictionaryRequest,
    GetCustomDictionaryResponse, Morpheme, OutOfVocab, RemoveCustomDictionariesRequest,
    RemoveCustomDictionariesResponse, Revision, RevisedBlock, RevisedSentence, Segment,
    SegmentSentence, SegmentToken, Sentence, Tag, TextSpan, Token, TokenizeRequest,
    TokenizeResponse, UpdateCustomDictionaryRequest, UpdateCustomDictionaryResponse,
};
use crate::transport::{CustomDictionaryService, LanguageService, RevisionService};
use crate::view::{Tagged, Tokenized};

pub(crate) fn ctx() -> CallContext {
    CallContext {
        apikey: "koba-TESTKEY".to_string(),
        host: "localhost".to_string(),
        port: 5656,
    }
}

pub(crate) fn span(text: &str) -> Option<TextSpan> {
    Some(TextSpan {
        content: text.to_string(),
        begin_offset: 0,
        length: text.chars().count() as i32,
    })
}

pub(crate) fn morpheme(text: &str, tag: Tag, probability: f32, oov: OutOfVocab) -> Morpheme {
    Morpheme {
        text: span(text),
        tag: tag as i32,
        probability,
        out_of_vocab: oov as i32,
    }
}

pub(crate) fn segment(text: &str, hint: &str) -> Segment {
    Segment {
        text: span(text),
        hint: hint.to_string(),
    }
}

fn token(text: &str, morphemes: Vec<Morpheme>) -> Token {
    let tagged = morphemes
        .iter()
        .map(|m| {
            let tag = Tag::try_from(m.tag).map(|t| t.as_str_name()).unwrap_or("UNK");
            format!("{}/{}", m.text.as_ref().map(|t| t.content.as_str()).unwrap_or(""), tag)
        })
        .collect::<Vec<_>>()
        .join("+");
    Token {
        text: span(text),
        morphemes,
        lemma: String::new(),
        tagged,
    }
}

fn segment_token(text: &str, segments: Vec<Segment>) -> SegmentToken {
    let tagged = segments
        .iter()
        .map(|s| format!("{}/{}", s.text.as_ref().map(|t| t.content.as_str()).unwrap_or(""), s.hint))
        .collect::<Vec<_>>()
        .join("+");
    SegmentToken {
        text: span(text),
        segments,
        tagged,
    }
}

/// "햇빛이 선명하게 빛난다."
pub(crate) fn tagged_response() -> AnalyzeSyntaxResponse {
    let m = |text, tag| morpheme(text, tag, 0.9, OutOfVocab::InWordEmbedding);
    AnalyzeSyntaxResponse {
        sentences: vec![Sentence {
            text: span("햇빛이 선명하게 빛난다."),
            tokens: vec![
                token("햇빛이", vec![m("햇빛", Tag::Nng), m("이", Tag::Jks)]),
                token(
                    "선명하게",
                    vec![m("선명", Tag::Nng), m("하", Tag::Xsa), m("게", Tag::Ec)],
                ),
                token(
                    "빛난다.",
                    vec![m("빛나", Tag::Vv), m("ㄴ다", Tag::Ef), m(".", Tag::Sf)],
                ),
            ],
            refined: String::new(),
        }],
        language: "ko_KR".to_string(),
    }
}

pub(crate) fn tagged_sample() -> Tagged {
    Tagged::new("햇빛이 선명하게 빛난다.", Some(tagged_response()))
}

/// "오늘은 정말 추운 날이네요."
pub(crate) fn tokenized_response() -> TokenizeResponse {
    TokenizeResponse {
        sentences: vec![SegmentSentence {
            text: span("오늘은 정말 추운 날이네요."),
            tokens: vec![
                segment_token("오늘은", vec![segment("오늘", "N"), segment("은", "J")]),
                segment_token("정말", vec![segment("정말", "A")]),
                segment_token("추운", vec![segment("춥", "V"), segment("ㄴ", "E")]),
                segment_token(
                    "날이네요.",
                    vec![
                        segment("날", "N"),
                        segment("이", "V"),
                        segment("네", "E"),
                        segment("요", "J"),
                        segment(".", "S"),
                    ],
                ),
            ],
        }],
        language: "ko_KR".to_string(),
    }
}

pub(crate) fn tokenized_sample() -> Tokenized {
    Tokenized::new("오늘은 정말 추운 날이네요.", Some(tokenized_response()))
}

/// "영수 도 줄기가 얇어서"
pub(crate) fn corrected_response() -> CorrectErrorResponse {
    let blocks = vec![
        RevisedBlock {
            origin: span("영수 도"),
            revised: "영수도".to_string(),
            revisions: vec![Revision {
                revised: "영수도".to_string(),
                comment: "조사는 앞말에 붙여 씁니다.".to_string(),
                category: "SPACING".to_string(),
            }],
        },
        RevisedBlock {
            origin: span("얇어서"),
            revised: "얇아서".to_string(),
            revisions: vec![Revision {
                revised: "얇아서".to_string(),
                comment: "어간의 모음에 맞게 씁니다.".to_string(),
                category: "GRAMMAR".to_string(),
            }],
        },
    ];
    CorrectErrorResponse {
        origin: "영수 도 줄기가 얇어서".to_string(),
        revised: "영수도 줄기가 얇아서".to_string(),
        revised_sentences: vec![RevisedSentence {
            origin: "영수 도 줄기가 얇어서".to_string(),
            revised: "영수도 줄기가 얇아서".to_string(),
            revised_blocks: blocks.clone(),
        }],
        revised_blocks: blocks,
        language: "ko_KR".to_string(),
    }
}

/// 호출을 기록하고 미리 정한 응답을 돌려주는 전송 계층
///
/// 사용자 사전은 메모리에 저장하므로 올리고 내려받기를 확인할 수 있습니다.
#[derive(Default)]
pub(crate) struct FakeTransport {
    calls: AtomicUsize,
    failure: Mutex<Option<(Code, String)>>,
    dicts: Mutex<BTreeMap<String, CustomDictionary>>,
    pub(crate) last_analyze: Mutex<Option<AnalyzeSyntaxRequest>>,
    pub(crate) last_analyze_list: Mutex<Option<AnalyzeSyntaxListRequest>>,
    pub(crate) last_tokenize: Mutex<Option<TokenizeRequest>>,
    pub(crate) last_correct: Mutex<Option<CorrectErrorRequest>>,
}

impl FakeTransport {
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// 이후 모든 호출을 주어진 상태로 실패시킵니다.
    pub(crate) fn fail_with(&self, code: Code, message: &str) {
        *self.failure.lock().unwrap() = Some((code, message.to_string()));
    }

    pub(crate) fn stored_dict(&self, domain: &str) -> Option<CustomDictionary> {
        self.dicts.lock().unwrap().get(domain).cloned()
    }

    fn enter(&self) -> Result<(), Status> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.failure.lock().unwrap().as_ref() {
            Some((code, message)) => Err(Status::new(*code, message.clone())),
            None => Ok(()),
        }
    }
}

fn set_size(set: &Option<crate::proto::DictSet>) -> i32 {
    set.as_ref().map(|s| s.items.len() as i32).unwrap_or(0)
}

impl LanguageService for FakeTransport {
    fn analyze_syntax(&self, req: AnalyzeSyntaxRequest) -> Result<AnalyzeSyntaxResponse, Status> {
        self.enter()?;
        *self.last_analyze.lock().unwrap() = Some(req);
        Ok(tagged_response())
    }

    fn analyze_syntax_list(
        &self,
        req: AnalyzeSyntaxListRequest,
    ) -> Result<AnalyzeSyntaxListResponse, Status> {
        self.enter()?;
        let sentences = req
            .sentences
            .iter()
            .map(|_| tagged_response().sentences.remove(0))
            .collect();
        *self.last_analyze_list.lock().unwrap() = Some(req);
        Ok(AnalyzeSyntaxListResponse {
            sentences,
            language: "ko_KR".to_string(),
        })
    }

    fn tokenize(&self, req: TokenizeRequest) -> Result<TokenizeResponse, Status> {
        self.enter()?;
        *self.last_tokenize.lock().unwrap() = Some(req);
        Ok(tokenized_response())
    }
}

impl CustomDictionaryService for FakeTransport {
    fn get_custom_dictionary_list(&self) -> Result<GetCustomDictionaryListResponse, Status> {
        self.enter()?;
        let domain_dicts = self
            .dicts
            .lock()
            .unwrap()
            .values()
            .map(|d| CustomDictionaryMeta {
                domain_name: d.domain_name.clone(),
                np_set_size: set_size(&d.np_set),
                cp_set_size: set_size(&d.cp_set),
                cp_caret_set_size: set_size(&d.cp_caret_set),
                vv_set_size: set_size(&d.vv_set),
                va_set_size: set_size(&d.va_set),
            })
            .collect();
        Ok(GetCustomDictionaryListResponse { domain_dicts })
    }

    fn get_custom_dictionary(
        &self,
        req: GetCustomDictionaryRequest,
    ) -> Result<GetCustomDictionaryResponse, Status> {
        self.enter()?;
        Ok(GetCustomDictionaryResponse {
            dict: self.stored_dict(&req.domain_name),
            domain_name: req.domain_name,
        })
    }

    fn update_custom_dictionary(
        &self,
        req: UpdateCustomDictionaryRequest,
    ) -> Result<UpdateCustomDictionaryResponse, Status> {
        self.enter()?;
        let dict = req.dict.unwrap_or_default();
        self.dicts
            .lock()
            .unwrap()
            .insert(req.domain_name.clone(), dict);
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
        let deleted_domain_names = if req.all {
            let all = std::mem::take(&mut *dicts);
            all.into_keys().map(|name| (name, true)).collect()
        } else {
            req.domain_names
                .into_iter()
                .map(|name| {
                    let removed = dicts.remove(&name).is_some();
                    (name, removed)
                })
                .collect()
        };
        Ok(RemoveCustomDictionariesResponse {
            deleted_domain_names,
        })
    }
}

impl RevisionService for FakeTransport {
    fn correct_error(&self, req: CorrectErrorRequest) -> Result<CorrectErrorResponse, Status> {
        self.enter()?;
        *self.last_correct.lock().unwrap() = Some(req);
        Ok(corrected_response())
    }
}
