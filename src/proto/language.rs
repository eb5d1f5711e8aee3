//! 형태소 분석/토큰화 서비스 메시지 (`bareun.LanguageService`)

use serde::Serialize;

use super::enum_name_serializer;

/// 오프셋 계산에 사용할 문자 인코딩
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum EncodingType {
    None = 0,
    Utf8 = 1,
    Utf16 = 2,
    Utf32 = 3,
}

impl EncodingType {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            EncodingType::None => "NONE",
            EncodingType::Utf8 => "UTF8",
            EncodingType::Utf16 => "UTF16",
            EncodingType::Utf32 => "UTF32",
        }
    }
}

/// 세종 품사 태그 집합
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Tag {
    /// 알 수 없음
    Unk = 0,
    /// 연결 어미
    Ec = 1,
    /// 종결 어미
    Ef = 2,
    /// 선어말 어미
    Ep = 3,
    /// 관형형 전성 어미
    Etm = 4,
    /// 명사형 전성 어미
    Etn = 5,
    /// 감탄사
    Ic = 6,
    /// 접속 조사
    Jc = 7,
    /// 부사격 조사
    Jkb = 8,
    /// 보격 조사
    Jkc = 9,
    /// 관형격 조사
    Jkg = 10,
    /// 목적격 조사
    Jko = 11,
    /// 인용격 조사
    Jkq = 12,
    /// 주격 조사
    Jks = 13,
    /// 호격 조사
    Jkv = 14,
    /// 보조사
    Jx = 15,
    /// 일반 부사
    Mag = 16,
    /// 접속 부사
    Maj = 17,
    /// 관형사
    Mm = 18,
    /// 분석 불능
    Na = 19,
    /// 명사 추정
    Nf = 20,
    /// 의존 명사
    Nnb = 21,
    /// 일반 명사
    Nng = 22,
    /// 고유 명사
    Nnp = 23,
    /// 대명사
    Np = 24,
    /// 수사
    Nr = 25,
    /// 용언 추정
    Nv = 26,
    /// 줄임표
    Se = 27,
    /// 마침표, 물음표, 느낌표
    Sf = 28,
    /// 한자
    Sh = 29,
    /// 외국어
    Sl = 30,
    /// 숫자
    Sn = 31,
    /// 붙임표
    So = 32,
    /// 쉼표, 가운뎃점, 콜론, 빗금
    Sp = 33,
    /// 따옴표, 괄호표, 줄표
    Ss = 34,
    /// 기타 기호
    Sw = 35,
    /// 형용사
    Va = 36,
    /// 부정 지정사
    Vcn = 37,
    /// 긍정 지정사
    Vcp = 38,
    /// 동사
    Vv = 39,
    /// 보조 용언
    Vx = 40,
    /// 체언 접두사
    Xpn = 41,
    /// 어근
    Xr = 42,
    /// 형용사 파생 접미사
    Xsa = 43,
    /// 명사 파생 접미사
    Xsn = 44,
    /// 동사 파생 접미사
    Xsv = 45,
    /// 패딩
    Pad = 46,
}

impl Tag {
    /// 프로토콜에 정의된 태그 이름 (예: `NNG`)
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Tag::Unk => "UNK",
            Tag::Ec => "EC",
            Tag::Ef => "EF",
            Tag::Ep => "EP",
            Tag::Etm => "ETM",
            Tag::Etn => "ETN",
            Tag::Ic => "IC",
            Tag::Jc => "JC",
            Tag::Jkb => "JKB",
            Tag::Jkc => "JKC",
            Tag::Jkg => "JKG",
            Tag::Jko => "JKO",
            Tag::Jkq => "JKQ",
            Tag::Jks => "JKS",
            Tag::Jkv => "JKV",
            Tag::Jx => "JX",
            Tag::Mag => "MAG",
            Tag::Maj => "MAJ",
            Tag::Mm => "MM",
            Tag::Na => "NA",
            Tag::Nf => "NF",
            Tag::Nnb => "NNB",
            Tag::Nng => "NNG",
            Tag::Nnp => "NNP",
            Tag::Np => "NP",
            Tag::Nr => "NR",
            Tag::Nv => "NV",
            Tag::Se => "SE",
            Tag::Sf => "SF",
            Tag::Sh => "SH",
            Tag::Sl => "SL",
            Tag::Sn => "SN",
            Tag::So => "SO",
            Tag::Sp => "SP",
            Tag::Ss => "SS",
            Tag::Sw => "SW",
            Tag::Va => "VA",
            Tag::Vcn => "VCN",
            Tag::Vcp => "VCP",
            Tag::Vv => "VV",
            Tag::Vx => "VX",
            Tag::Xpn => "XPN",
            Tag::Xr => "XR",
            Tag::Xsa => "XSA",
            Tag::Xsn => "XSN",
            Tag::Xsv => "XSV",
            Tag::Pad => "PAD",
        }
    }

    /// 태그 이름으로 태그를 찾습니다.
    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "UNK" => Some(Tag::Unk),
            "EC" => Some(Tag::Ec),
            "EF" => Some(Tag::Ef),
            "EP" => Some(Tag::Ep),
            "ETM" => Some(Tag::Etm),
            "ETN" => Some(Tag::Etn),
            "IC" => Some(Tag::Ic),
            "JC" => Some(Tag::Jc),
            "JKB" => Some(Tag::Jkb),
            "JKC" => Some(Tag::Jkc),
            "JKG" => Some(Tag::Jkg),
            "JKO" => Some(Tag::Jko),
            "JKQ" => Some(Tag::Jkq),
            "JKS" => Some(Tag::Jks),
            "JKV" => Some(Tag::Jkv),
            "JX" => Some(Tag::Jx),
            "MAG" => Some(Tag::Mag),
            "MAJ" => Some(Tag::Maj),
            "MM" => Some(Tag::Mm),
            "NA" => Some(Tag::Na),
            "NF" => Some(Tag::Nf),
            "NNB" => Some(Tag::Nnb),
            "NNG" => Some(Tag::Nng),
            "NNP" => Some(Tag::Nnp),
            "NP" => Some(Tag::Np),
            "NR" => Some(Tag::Nr),
            "NV" => Some(Tag::Nv),
            "SE" => Some(Tag::Se),
            "SF" => Some(Tag::Sf),
            "SH" => Some(Tag::Sh),
            "SL" => Some(Tag::Sl),
            "SN" => Some(Tag::Sn),
            "SO" => Some(Tag::So),
            "SP" => Some(Tag::Sp),
            "SS" => Some(Tag::Ss),
            "SW" => Some(Tag::Sw),
            "VA" => Some(Tag::Va),
            "VCN" => Some(Tag::Vcn),
            "VCP" => Some(Tag::Vcp),
            "VV" => Some(Tag::Vv),
            "VX" => Some(Tag::Vx),
            "XPN" => Some(Tag::Xpn),
            "XR" => Some(Tag::Xr),
            "XSA" => Some(Tag::Xsa),
            "XSN" => Some(Tag::Xsn),
            "XSV" => Some(Tag::Xsv),
            "PAD" => Some(Tag::Pad),
            _ => None,
        }
    }
}

/// 형태소가 사전에 있는지 여부
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum OutOfVocab {
    /// 임베딩 사전에 있는 형태소 (기본값)
    InWordEmbedding = 0,
    /// 사전에 없는 형태소
    OutOfVocab = 1,
    /// 사용자 사전에서 찾은 형태소
    InCustomDict = 2,
    /// 내장 사전에서 찾은 형태소
    InBuiltinDict = 3,
}

impl OutOfVocab {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            OutOfVocab::InWordEmbedding => "IN_WORD_EMBEDDING",
            OutOfVocab::OutOfVocab => "OUT_OF_VOCAB",
            OutOfVocab::InCustomDict => "IN_CUSTOM_DICT",
            OutOfVocab::InBuiltinDict => "IN_BUILTIN_DICT",
        }
    }
}

enum_name_serializer!(serialize_encoding_type, EncodingType);
enum_name_serializer!(serialize_tag, Tag);
enum_name_serializer!(serialize_out_of_vocab, OutOfVocab);

/// 분석 요청 문서
#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[prost(string, tag = "1")]
    pub content: String,
    #[prost(string, tag = "2")]
    pub language: String,
}

/// 원문의 일부 구간
#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSpan {
    #[prost(string, tag = "1")]
    pub content: String,
    #[prost(int32, tag = "2")]
    pub begin_offset: i32,
    #[prost(int32, tag = "3")]
    pub length: i32,
}

/// 형태소
#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Morpheme {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextSpan>,
    #[prost(enumeration = "Tag", tag = "2")]
    #[serde(serialize_with = "serialize_tag")]
    pub tag: i32,
    #[prost(float, tag = "3")]
    pub probability: f32,
    #[prost(enumeration = "OutOfVocab", tag = "4")]
    #[serde(serialize_with = "serialize_out_of_vocab")]
    pub out_of_vocab: i32,
}

/// 어절
#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextSpan>,
    #[prost(message, repeated, tag = "2")]
    pub morphemes: Vec<Morpheme>,
    #[prost(string, tag = "3")]
    pub lemma: String,
    #[prost(string, tag = "4")]
    pub tagged: String,
}

/// 문장
#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentence {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextSpan>,
    #[prost(message, repeated, tag = "2")]
    pub tokens: Vec<Token>,
    #[prost(string, tag = "3")]
    pub refined: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeSyntaxRequest {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,
    #[prost(enumeration = "EncodingType", tag = "2")]
    #[serde(serialize_with = "serialize_encoding_type")]
    pub encoding_type: i32,
    #[prost(bool, tag = "3")]
    pub auto_split_sentence: bool,
    #[prost(string, tag = "4")]
    pub custom_domain: String,
    #[prost(string, repeated, tag = "5")]
    pub custom_dict_names: Vec<String>,
    #[prost(bool, tag = "6")]
    pub auto_spacing: bool,
    #[prost(bool, tag = "7")]
    pub auto_jointing: bool,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeSyntaxResponse {
    #[prost(message, repeated, tag = "1")]
    pub sentences: Vec<Sentence>,
    #[prost(string, tag = "2")]
    pub language: String,
}

/// 문장 목록을 분리 없이 그대로 분석하는 요청
#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeSyntaxListRequest {
    #[prost(string, repeated, tag = "1")]
    pub sentences: Vec<String>,
    #[prost(string, tag = "2")]
    pub language: String,
    #[prost(enumeration = "EncodingType", tag = "3")]
    #[serde(serialize_with = "serialize_encoding_type")]
    pub encoding_type: i32,
    #[prost(string, tag = "4")]
    pub custom_domain: String,
    #[prost(string, repeated, tag = "5")]
    pub custom_dict_names: Vec<String>,
    #[prost(bool, tag = "6")]
    pub auto_spacing: bool,
    #[prost(bool, tag = "7")]
    pub auto_jointing: bool,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeSyntaxListResponse {
    #[prost(message, repeated, tag = "1")]
    pub sentences: Vec<Sentence>,
    #[prost(string, tag = "2")]
    pub language: String,
}

impl From<AnalyzeSyntaxListResponse> for AnalyzeSyntaxResponse {
    fn from(res: AnalyzeSyntaxListResponse) -> Self {
        Self {
            sentences: res.sentences,
            language: res.language,
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenizeRequest {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,
    #[prost(enumeration = "EncodingType", tag = "2")]
    #[serde(serialize_with = "serialize_encoding_type")]
    pub encoding_type: i32,
    #[prost(bool, tag = "3")]
    pub auto_split_sentence: bool,
}

/// 토큰화의 최소 단위
#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextSpan>,
    /// 한 글자 분류 (N, V, A, S, M, J, I, E)
    #[prost(string, tag = "2")]
    pub hint: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentToken {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextSpan>,
    #[prost(message, repeated, tag = "2")]
    pub segments: Vec<Segment>,
    #[prost(string, tag = "3")]
    pub tagged: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentSentence {
    #[prost(message, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextSpan>,
    #[prost(message, repeated, tag = "2")]
    pub tokens: Vec<SegmentToken>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenizeResponse {
    #[prost(message, repeated, tag = "1")]
    pub sentences: Vec<SegmentSentence>,
    #[prost(string, tag = "2")]
    pub language: String,
}
