//! 사용자 사전 서비스 메시지 (`bareun.CustomDictionaryService`)

use std::collections::BTreeMap;

use serde::Serialize;

use super::enum_name_serializer;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum DictType {
    TokenIndex = 0,
    WordList = 1,
    WordListCompound = 2,
}

impl DictType {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            DictType::TokenIndex => "TOKEN_INDEX",
            DictType::WordList => "WORD_LIST",
            DictType::WordListCompound => "WORD_LIST_COMPOUND",
        }
    }
}

enum_name_serializer!(serialize_dict_type, DictType);

/// 단어 집합 하나. 단어는 `items`의 키로만 의미가 있습니다.
#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DictSet {
    #[prost(btree_map = "string, int32", tag = "1")]
    pub items: BTreeMap<String, i32>,
    #[prost(enumeration = "DictType", tag = "2")]
    #[serde(serialize_with = "serialize_dict_type")]
    pub r#type: i32,
    #[prost(string, tag = "3")]
    pub name: String,
}

impl DictSet {
    /// 단어들만 꺼냅니다.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }
}

/// 사용자 사전 전체
#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomDictionary {
    #[prost(string, tag = "1")]
    pub domain_name: String,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub np_set: Option<DictSet>,
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cp_set: Option<DictSet>,
    #[prost(message, optional, tag = "4")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cp_caret_set: Option<DictSet>,
    #[prost(message, optional, tag = "5")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vv_set: Option<DictSet>,
    #[prost(message, optional, tag = "6")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub va_set: Option<DictSet>,
}

/// 사전 목록 조회 시 돌려받는 요약 정보
#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomDictionaryMeta {
    #[prost(string, tag = "1")]
    pub domain_name: String,
    #[prost(int32, tag = "2")]
    pub np_set_size: i32,
    #[prost(int32, tag = "3")]
    pub cp_set_size: i32,
    #[prost(int32, tag = "4")]
    pub cp_caret_set_size: i32,
    #[prost(int32, tag = "5")]
    pub vv_set_size: i32,
    #[prost(int32, tag = "6")]
    pub va_set_size: i32,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCustomDictionaryListResponse {
    #[prost(message, repeated, tag = "1")]
    pub domain_dicts: Vec<CustomDictionaryMeta>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCustomDictionaryRequest {
    #[prost(string, tag = "1")]
    pub domain_name: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetCustomDictionaryResponse {
    #[prost(string, tag = "1")]
    pub domain_name: String,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dict: Option<CustomDictionary>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomDictionaryRequest {
    #[prost(string, tag = "1")]
    pub domain_name: String,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dict: Option<CustomDictionary>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomDictionaryResponse {
    #[prost(string, tag = "1")]
    pub updated_domain_name: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveCustomDictionariesRequest {
    #[prost(string, repeated, tag = "1")]
    pub domain_names: Vec<String>,
    #[prost(bool, tag = "2")]
    pub all: bool,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveCustomDictionariesResponse {
    #[prost(btree_map = "string, bool", tag = "1")]
    pub deleted_domain_names: BTreeMap<String, bool>,
}
