//! 맞춤법 교정 서비스 메시지 (`bareun.RevisionService`)

use serde::Serialize;

use super::language::{serialize_encoding_type, Document, TextSpan};

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectErrorRequest {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,
    #[prost(enumeration = "super::language::EncodingType", tag = "2")]
    #[serde(serialize_with = "serialize_encoding_type")]
    pub encoding_type: i32,
    #[prost(bool, tag = "3")]
    pub auto_split_sentence: bool,
    #[prost(string, tag = "4")]
    pub custom_domain: String,
}

/// 교정 항목 하나에 대한 설명
#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Revision {
    #[prost(string, tag = "1")]
    pub revised: String,
    #[prost(string, tag = "2")]
    pub comment: String,
    #[prost(string, tag = "3")]
    pub category: String,
}

/// 원문에서 고쳐진 구간
#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisedBlock {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<TextSpan>,
    #[prost(string, tag = "2")]
    pub revised: String,
    #[prost(message, repeated, tag = "3")]
    pub revisions: Vec<Revision>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisedSentence {
    #[prost(string, tag = "1")]
    pub origin: String,
    #[prost(string, tag = "2")]
    pub revised: String,
    #[prost(message, repeated, tag = "3")]
    pub revised_blocks: Vec<RevisedBlock>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectErrorResponse {
    #[prost(string, tag = "1")]
    pub origin: String,
    #[prost(string, tag = "2")]
    pub revised: String,
    #[prost(message, repeated, tag = "3")]
    pub revised_sentences: Vec<RevisedSentence>,
    #[prost(message, repeated, tag = "4")]
    pub revised_blocks: Vec<RevisedBlock>,
    #[prost(string, tag = "5")]
    pub language: String,
}
