//! 맞춤법 교정기
//!
//! 바른 서버의 교정 서비스(`CorrectError`)를 호출합니다. 결과는 원문, 교정문,
//! 문장별 수정 블록을 담은 [`Corrected`]로 돌려줍니다.

use std::io::Write;
use std::sync::Arc;

use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{classify, CallContext, Result};
use crate::proto::{CorrectErrorResponse, RevisedBlock, RevisedSentence};
use crate::request;
use crate::transport::{GrpcTransport, RevisionService, ServiceEndpoint};
use crate::view::span_text;

/// 교정 옵션
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorrectOptions {
    /// 문장 자동 분리
    pub auto_split: bool,
    /// 교정에 쓸 사용자 사전 도메인
    pub custom_domain: String,
}

impl CorrectOptions {
    /// 설정에 등록된 첫 번째 사용자 사전을 교정 도메인으로 씁니다.
    ///
    /// 교정 요청은 도메인을 하나만 받으므로 나머지 이름은 쓰지 않습니다.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            auto_split: false,
            custom_domain: config.custom_dicts.first().cloned().unwrap_or_default(),
        }
    }

    pub fn with_auto_split(mut self, auto_split: bool) -> Self {
        self.auto_split = auto_split;
        self
    }

    pub fn with_custom_domain(mut self, domain: impl Into<String>) -> Self {
        self.custom_domain = domain.into();
        self
    }
}

/// 교정 결과 하나
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Corrected {
    response: CorrectErrorResponse,
}

impl Corrected {
    pub fn new(response: CorrectErrorResponse) -> Self {
        Self { response }
    }

    /// 원문
    pub fn origin(&self) -> &str {
        &self.response.origin
    }

    /// 교정문
    pub fn revised(&self) -> &str {
        &self.response.revised
    }

    pub fn revised_sentences(&self) -> &[RevisedSentence] {
        &self.response.revised_sentences
    }

    /// 문장 구분 없이 모은 수정 블록
    pub fn revised_blocks(&self) -> &[RevisedBlock] {
        &self.response.revised_blocks
    }

    pub fn msg(&self) -> &CorrectErrorResponse {
        &self.response
    }

    pub fn into_msg(self) -> CorrectErrorResponse {
        self.response
    }

    pub fn as_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(&self.response)?)
    }

    pub fn as_json_str(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.response)?)
    }

    pub fn print_as_json<W: Write>(&self, mut out: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut out, &self.response)?;
        out.flush()?;
        Ok(())
    }

    /// 사람이 읽기 좋은 형태로 출력
    pub fn print_results<W: Write>(&self, out: W) -> Result<()> {
        print_results(std::slice::from_ref(self), out)
    }

    fn write_report<W: Write>(&self, index: usize, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "=== 맞춤법 검사 결과 {}===", index)?;
        writeln!(out, "원문: {}", self.origin())?;
        writeln!(out, "교정문: {}", self.revised())?;

        if self.revised_sentences().is_empty() {
            return Ok(());
        }
        writeln!(out, "\n=== 교정된 문장들 ===")?;
        for sentence in self.revised_sentences() {
            writeln!(out, "[{}] 원문: {}", index, sentence.origin)?;
            writeln!(out, "    교정문: {}", sentence.revised)?;
            if sentence.revised_blocks.is_empty() {
                continue;
            }
            writeln!(out, "    === 수정 블록 ===")?;
            for (block_index, block) in sentence.revised_blocks.iter().enumerate() {
                writeln!(
                    out,
                    "    {}-{} 원문: {}",
                    index,
                    block_index + 1,
                    span_text(&block.origin)
                )?;
                writeln!(out, "        교정문: {}", block.revised)?;
                if !block.revisions.is_empty() {
                    writeln!(out, "        수정 세부사항:")?;
                    for rev in &block.revisions {
                        writeln!(out, "          - {} ({})", rev.comment, rev.category)?;
                    }
                }
            }
        }
        Ok(())
    }
}

/// 여러 교정 결과를 1번부터 번호를 붙여 출력합니다.
pub fn print_results<W: Write>(results: &[Corrected], mut out: W) -> Result<()> {
    for (i, result) in results.iter().enumerate() {
        result.write_report(i + 1, &mut out)?;
    }
    out.flush()?;
    Ok(())
}

/// 여러 교정 결과를 JSON 배열로
pub fn results_as_json(results: &[Corrected]) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(results)?)
}

/// 맞춤법 교정기
pub struct Corrector<T = GrpcTransport> {
    transport: Arc<T>,
    config: ClientConfig,
    ctx: CallContext,
}

impl<T> std::fmt::Debug for Corrector<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Corrector").field("ctx", &self.ctx).finish()
    }
}

impl Corrector<GrpcTransport> {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = GrpcTransport::connect(&config)?;
        Self::with_transport(config, transport)
    }
}

impl<T: RevisionService> Corrector<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Result<Self> {
        Self::with_shared_transport(config, Arc::new(transport))
    }

    pub fn with_shared_transport(config: ClientConfig, transport: Arc<T>) -> Result<Self> {
        config.validate()?;
        let ctx = ServiceEndpoint::from_config(&config).call_context(config.apikey());
        log::debug!("Corrector 생성: {:?}", ctx);
        Ok(Self {
            transport,
            config,
            ctx,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// 설정에서 만든 기본 교정 옵션
    pub fn options(&self) -> CorrectOptions {
        CorrectOptions::from_config(&self.config)
    }

    /// 문장 자동 분리를 켜고 교정
    pub fn correct_error(&self, content: &str) -> Result<Corrected> {
        self.correct_error_with(content, &self.options().with_auto_split(true))
    }

    /// 주어진 옵션 그대로 교정합니다. 설정의 사전 이름은 보지 않습니다.
    ///
    /// 빈 문자열이면 서버를 부르지 않고 빈 결과를 돌려줍니다.
    pub fn correct_error_with(&self, content: &str, opts: &CorrectOptions) -> Result<Corrected> {
        if content.is_empty() {
            log::warn!("빈 문장이 입력되었습니다. 교정하지 않습니다.");
            return Ok(Corrected::default());
        }
        log::debug!("맞춤법 교정 요청: {}자", content.chars().count());
        let req = request::correct_error(content, opts.auto_split, &opts.custom_domain);
        let res = self
            .transport
            .correct_error(req)
            .map_err(|s| classify(s, &self.ctx))?;
        Ok(Corrected::new(res))
    }

    /// 문장마다 따로 교정합니다. 문장 자동 분리는 하지 않습니다.
    ///
    /// `custom_domain`이 비어 있으면 설정의 첫 번째 사전을 씁니다.
    /// 하나라도 실패하면 그 오류를 돌려줍니다.
    pub fn correct_error_list<S: AsRef<str>>(
        &self,
        contents: &[S],
        custom_domain: &str,
    ) -> Result<Vec<Corrected>> {
        let mut opts = self.options();
        if !custom_domain.is_empty() {
            opts = opts.with_custom_domain(custom_domain);
        }
        contents
            .iter()
            .map(|c| self.correct_error_with(c.as_ref(), &opts))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BareunError;
    use crate::test_utils::{corrected_response, FakeTransport};
    use tonic::Code;

    fn corrector() -> Corrector<FakeTransport> {
        Corrector::with_transport(ClientConfig::new("koba-TESTKEY"), FakeTransport::default())
            .unwrap()
    }

    #[test]
    fn test_correct_error() {
        let c = corrector();
        let result = c.correct_error("영수 도 줄기가 얇어서").unwrap();
        assert_eq!(result.origin(), "영수 도 줄기가 얇어서");
        assert_eq!(result.revised(), "영수도 줄기가 얇아서");
        assert_eq!(result.revised_sentences().len(), 1);
        assert_eq!(result.revised_blocks().len(), 2);

        let req = c.transport.last_correct.lock().unwrap().clone().unwrap();
        assert!(req.auto_split_sentence);
        assert!(req.custom_domain.is_empty());
    }

    #[test]
    fn test_configured_dict_is_default_domain() {
        let config = ClientConfig::new("koba-TESTKEY").with_custom_dicts(["law", "news"]);
        let c = Corrector::with_transport(config, FakeTransport::default()).unwrap();
        assert_eq!(c.options().custom_domain, "law");

        c.correct_error("영수 도 줄기가 얇어서").unwrap();
        let req = c.transport.last_correct.lock().unwrap().clone().unwrap();
        assert_eq!(req.custom_domain, "law");

        c.correct_error_list(&["첫째"], "").unwrap();
        let req = c.transport.last_correct.lock().unwrap().clone().unwrap();
        assert_eq!(req.custom_domain, "law");

        // 직접 준 이름이 우선
        c.correct_error_list(&["둘째"], "sports").unwrap();
        let req = c.transport.last_correct.lock().unwrap().clone().unwrap();
        assert_eq!(req.custom_domain, "sports");
    }

    #[test]
    fn test_empty_input_makes_no_call() {
        let c = corrector();
        let result = c.correct_error("").unwrap();
        assert_eq!(result.origin(), "");
        assert!(result.revised_sentences().is_empty());
        assert_eq!(c.transport.calls(), 0);
    }

    #[test]
    fn test_correct_error_list() {
        let c = corrector();
        let results = c.correct_error_list(&["첫째", "둘째", "셋째"], "news").unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(c.transport.calls(), 3);
        let req = c.transport.last_correct.lock().unwrap().clone().unwrap();
        assert!(!req.auto_split_sentence);
        assert_eq!(req.custom_domain, "news");
        assert_eq!(req.document.unwrap().content, "셋째");
    }

    #[test]
    fn test_print_results_format() {
        let result = Corrected::new(corrected_response());
        let mut out = Vec::new();
        result.print_results(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let expected = "\
=== 맞춤법 검사 결과 1===
원문: 영수 도 줄기가 얇어서
교정문: 영수도 줄기가 얇아서

=== 교정된 문장들 ===
[1] 원문: 영수 도 줄기가 얇어서
    교정문: 영수도 줄기가 얇아서
    === 수정 블록 ===
    1-1 원문: 영수 도
        교정문: 영수도
        수정 세부사항:
          - 조사는 앞말에 붙여 씁니다. (SPACING)
    1-2 원문: 얇어서
        교정문: 얇아서
        수정 세부사항:
          - 어간의 모음에 맞게 씁니다. (GRAMMAR)
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_print_results_numbers_each_result() {
        let results = vec![Corrected::default(), Corrected::new(corrected_response())];
        let mut out = Vec::new();
        print_results(&results, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("=== 맞춤법 검사 결과 1===\n원문: \n교정문: \n"));
        assert!(text.contains("=== 맞춤법 검사 결과 2==="));
        assert!(text.contains("[2] 원문:"));
        assert!(text.contains("2-2 원문: 얇어서"));
    }

    #[test]
    fn test_json() {
        let result = Corrected::new(corrected_response());
        let json = result.as_json().unwrap();
        assert_eq!(json["revised"], "영수도 줄기가 얇아서");
        assert_eq!(
            json["revisedSentences"][0]["revisedBlocks"][0]["origin"]["content"],
            "영수 도"
        );
        let s = result.as_json_str().unwrap();
        assert_eq!(s, result.as_json_str().unwrap());

        let list = results_as_json(&[result.clone(), result]).unwrap();
        assert_eq!(list.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_print_as_json() {
        let result = Corrected::new(corrected_response());
        let mut out = Vec::new();
        result.print_as_json(&mut out).unwrap();
        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed, result.as_json_str().unwrap());
        assert!(printed.contains("얇아서"));
    }

    #[test]
    fn test_errors_are_classified() {
        let c = corrector();
        c.transport.fail_with(Code::PermissionDenied, "invalid key");
        let err = c.correct_error("오늘").unwrap_err();
        assert!(matches!(err, BareunError::InvalidCredential { .. }));
        assert!(err.to_string().contains("koba-TESTKEY"));
    }
}
