//! 부품 총소유비용(TCO) 비교 계산 모듈 모음.
//! 단일 부품의 연간 비용 분해(evaluator)와 기준 부품 대비 대체 부품 순위화(ranker)로 구성한다.

pub mod error;
pub mod evaluator;
pub mod ranker;

pub use error::TcoError;
pub use evaluator::*;
pub use ranker::*;
