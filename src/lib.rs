//! 바른(bareun) 한국어 형태소 분석 서버용 클라이언트
//!
//! - [`Tagger`]: 형태소 분석, 사용자 사전 관리
//! - [`Tokenizer`]: 토큰화(분절)
//! - [`Corrector`]: 맞춤법 교정

pub mod config;
pub mod corrector;
pub mod dict;
pub mod error;
pub mod proto;
pub mod request;
pub mod tagger;
pub mod tokenizer;
pub mod transport;
pub mod view;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::ClientConfig;
pub use corrector::{Corrected, CorrectOptions, Corrector};
pub use dict::{read_dic_file, CustomDict, DictKind};
pub use error::{BareunError, Result};
pub use request::TagOptions;
pub use tagger::Tagger;
pub use tokenizer::Tokenizer;
pub use view::{Hint, Pos, PosList, ResultView, Tagged, Tokenized};

/// 라이브러리 버전
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
