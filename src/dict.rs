//! 사용자 사전
//!
//! 도메인 이름 하나에 다섯 가지 단어 집합(고유명사, 복합명사, 분리 복합명사,
//! 동사, 형용사)을 로컬에 들고 있다가 서버로 올리거나(`update`) 서버에서
//! 내려받습니다(`load`). 로컬 집합은 명시적으로 바꾸거나 `load` 할 때만 변합니다.
//!
//! # 사전 파일 형식
//!
//! 한 줄에 단어 하나. `#`으로 시작하는 줄은 주석이고 빈 줄은 무시합니다.
//!
//! ```text
//! # 고유명사
//! 카카오톡
//! 바른
//! ```

use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use crate::error::{classify, BareunError, CallContext, Result};
use crate::proto::{
    CustomDictionary, DictSet, DictType, GetCustomDictionaryRequest,
    RemoveCustomDictionariesRequest, UpdateCustomDictionaryRequest,
};
use crate::transport::CustomDictionaryService;

/// 사전 안의 단어 집합 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DictKind {
    /// 고유명사 (`np-set`)
    ProperNoun,
    /// 복합명사 (`cp-set`)
    CompoundNoun,
    /// 분리 지점을 `^`로 표시한 복합명사 (`cp-caret-set`)
    CompoundNounCaret,
    /// 동사 (`vv-set`)
    Verb,
    /// 형용사 (`va-set`)
    Adjective,
}

impl DictKind {
    pub const ALL: [DictKind; 5] = [
        DictKind::ProperNoun,
        DictKind::CompoundNoun,
        DictKind::CompoundNounCaret,
        DictKind::Verb,
        DictKind::Adjective,
    ];

    /// 서버에 올릴 때 집합 이름 뒤에 붙는 접미사
    pub fn suffix(&self) -> &'static str {
        match self {
            DictKind::ProperNoun => "np-set",
            DictKind::CompoundNoun => "cp-set",
            DictKind::CompoundNounCaret => "cp-caret-set",
            DictKind::Verb => "vv-set",
            DictKind::Adjective => "va-set",
        }
    }

    fn index(&self) -> usize {
        match self {
            DictKind::ProperNoun => 0,
            DictKind::CompoundNoun => 1,
            DictKind::CompoundNounCaret => 2,
            DictKind::Verb => 3,
            DictKind::Adjective => 4,
        }
    }

    fn slot<'a>(&self, dict: &'a CustomDictionary) -> Option<&'a DictSet> {
        match self {
            DictKind::ProperNoun => dict.np_set.as_ref(),
            DictKind::CompoundNoun => dict.cp_set.as_ref(),
            DictKind::CompoundNounCaret => dict.cp_caret_set.as_ref(),
            DictKind::Verb => dict.vv_set.as_ref(),
            DictKind::Adjective => dict.va_set.as_ref(),
        }
    }
}

/// 사전 파일을 읽어 단어 집합을 만듭니다.
pub fn read_dic_file(path: impl AsRef<Path>) -> io::Result<HashSet<String>> {
    let file = File::open(path.as_ref())?;
    parse_dic_lines(BufReader::new(file))
}

/// 사전 형식의 텍스트를 읽습니다. 파일이 아닌 입력에도 씁니다.
pub fn parse_dic_lines<R: BufRead>(reader: R) -> io::Result<HashSet<String>> {
    let mut words = HashSet::new();
    for line in reader.lines() {
        let line = line?;
        if line.starts_with('#') {
            continue;
        }
        let word = line.trim();
        if !word.is_empty() {
            words.insert(word.to_string());
        }
    }
    Ok(words)
}

fn normalize<I, S>(words: I) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_string())
        .filter(|w| !w.is_empty())
}

/// 서버로 보낼 단어 집합 하나를 만듭니다. 값은 모두 1입니다.
pub fn build_dict_set(domain: &str, kind: DictKind, words: &HashSet<String>) -> DictSet {
    DictSet {
        items: words.iter().map(|w| (w.clone(), 1)).collect::<BTreeMap<_, _>>(),
        r#type: DictType::WordList as i32,
        name: format!("{}-{}", domain, kind.suffix()),
    }
}

/// 도메인 하나의 사용자 사전
///
/// 서버 접근은 같은 전송 계층을 공유하는 `Tagger`에서 얻어 옵니다.
pub struct CustomDict<T> {
    domain: String,
    transport: Arc<T>,
    ctx: CallContext,
    sets: [HashSet<String>; 5],
}

impl<T> std::fmt::Debug for CustomDict<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomDict")
            .field("domain", &self.domain)
            .field("ctx", &self.ctx)
            .field("sizes", &self.sets.iter().map(HashSet::len).collect::<Vec<_>>())
            .finish()
    }
}

impl<T: CustomDictionaryService> CustomDict<T> {
    /// 빈 사전. 도메인 이름이 비어 있으면 실패합니다.
    pub fn new(domain: impl Into<String>, transport: Arc<T>, ctx: CallContext) -> Result<Self> {
        let domain = domain.into();
        if domain.trim().is_empty() {
            return Err(BareunError::Config(
                "사용자 사전 이름이 비어 있습니다.".to_string(),
            ));
        }
        Ok(Self {
            domain,
            transport,
            ctx,
            sets: Default::default(),
        })
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// 종류별 단어 집합
    pub fn words(&self, kind: DictKind) -> &HashSet<String> {
        &self.sets[kind.index()]
    }

    /// 파일 내용으로 집합을 바꿉니다. 읽기에 실패하면 집합은 그대로입니다.
    pub fn read_from_file(&mut self, kind: DictKind, path: impl AsRef<Path>) -> Result<()> {
        let words = read_dic_file(path)?;
        self.sets[kind.index()] = words;
        Ok(())
    }

    /// 주어진 단어들로 집합을 바꿉니다.
    pub fn replace<I, S>(&mut self, kind: DictKind, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.sets[kind.index()] = normalize(words).collect();
    }

    /// 주어진 단어들을 집합에 더합니다.
    pub fn merge<I, S>(&mut self, kind: DictKind, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.sets[kind.index()].extend(normalize(words));
    }

    pub fn read_np_set_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.read_from_file(DictKind::ProperNoun, path)
    }

    pub fn read_cp_set_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.read_from_file(DictKind::CompoundNoun, path)
    }

    pub fn read_cp_caret_set_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.read_from_file(DictKind::CompoundNounCaret, path)
    }

    pub fn read_vv_set_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.read_from_file(DictKind::Verb, path)
    }

    pub fn read_va_set_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.read_from_file(DictKind::Adjective, path)
    }

    pub fn copy_np_set(&mut self, words: &HashSet<String>) {
        self.replace(DictKind::ProperNoun, words);
    }

    pub fn copy_cp_set(&mut self, words: &HashSet<String>) {
        self.replace(DictKind::CompoundNoun, words);
    }

    pub fn copy_cp_caret_set(&mut self, words: &HashSet<String>) {
        self.replace(DictKind::CompoundNounCaret, words);
    }

    pub fn copy_vv_set(&mut self, words: &HashSet<String>) {
        self.replace(DictKind::Verb, words);
    }

    pub fn copy_va_set(&mut self, words: &HashSet<String>) {
        self.replace(DictKind::Adjective, words);
    }

    /// 현재 로컬 상태를 서버 메시지로
    pub fn to_proto(&self) -> CustomDictionary {
        let set = |kind: DictKind| Some(build_dict_set(&self.domain, kind, self.words(kind)));
        CustomDictionary {
            domain_name: self.domain.clone(),
            np_set: set(DictKind::ProperNoun),
            cp_set: set(DictKind::CompoundNoun),
            cp_caret_set: set(DictKind::CompoundNounCaret),
            vv_set: set(DictKind::Verb),
            va_set: set(DictKind::Adjective),
        }
    }

    /// 다섯 집합을 서버에 올립니다.
    ///
    /// 서버가 같은 도메인 이름을 돌려주면 true
    pub fn update(&self) -> Result<bool> {
        let req = UpdateCustomDictionaryRequest {
            domain_name: self.domain.clone(),
            dict: Some(self.to_proto()),
        };
        let res = self
            .transport
            .update_custom_dictionary(req)
            .map_err(|s| classify(s, &self.ctx))?;
        let ok = res.updated_domain_name == self.domain;
        if ok {
            log::info!("사용자 사전 업데이트 완료: {}", self.domain);
        } else {
            log::warn!(
                "사용자 사전 업데이트 응답이 다릅니다: 요청={} 응답={}",
                self.domain,
                res.updated_domain_name
            );
        }
        Ok(ok)
    }

    /// 서버에 저장된 사전 전체를 가져옵니다. 로컬 상태는 바꾸지 않습니다.
    pub fn get(&self) -> Result<CustomDictionary> {
        let req = GetCustomDictionaryRequest {
            domain_name: self.domain.clone(),
        };
        let res = self
            .transport
            .get_custom_dictionary(req)
            .map_err(|s| classify(s, &self.ctx))?;
        Ok(res.dict.unwrap_or_else(|| CustomDictionary {
            domain_name: self.domain.clone(),
            ..Default::default()
        }))
    }

    /// 서버 사전으로 다섯 집합을 모두 덮어씁니다.
    ///
    /// 서버에 없는 집합은 비웁니다. 호출이 실패하면 로컬 상태는 그대로입니다.
    pub fn load(&mut self) -> Result<()> {
        let dict = self.get()?;
        for kind in DictKind::ALL {
            self.sets[kind.index()] = kind
                .slot(&dict)
                .map(|set| set.words().map(str::to_string).collect())
                .unwrap_or_default();
        }
        log::debug!("사용자 사전 내려받기 완료: {}", self.domain);
        Ok(())
    }

    /// 서버에서 사전을 지우고 로컬 집합도 비웁니다.
    ///
    /// 서버가 지웠다고 알려준 도메인 이름들을 돌려줍니다.
    /// 호출이 실패하면 로컬 상태는 그대로입니다.
    pub fn clear(&mut self) -> Result<Vec<String>> {
        let req = RemoveCustomDictionariesRequest {
            domain_names: vec![self.domain.clone()],
            all: false,
        };
        let res = self
            .transport
            .remove_custom_dictionaries(req)
            .map_err(|s| classify(s, &self.ctx))?;
        for set in self.sets.iter_mut() {
            set.clear();
        }
        log::info!("사용자 사전 삭제: {}", self.domain);
        Ok(deleted_names(res.deleted_domain_names))
    }
}

/// 삭제 결과에서 실제로 지워진 이름만
pub(crate) fn deleted_names(result: BTreeMap<String, bool>) -> Vec<String> {
    result
        .into_iter()
        .filter_map(|(name, deleted)| deleted.then_some(name))
        .collect()
}
