use thiserror::Error;

/// TCO 계산 중 발생 가능한 오류.
///
/// 모두 입력을 고쳐 다시 호출하면 되는 검증 오류이며, 계산은 부분적으로 수행되지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TcoError {
    /// 공통 비용 파라미터의 전제 조건 위반
    #[error("파라미터 오류 ({field}): {reason}")]
    InvalidParameters {
        field: &'static str,
        reason: &'static str,
    },
    /// 부품 레코드의 수치 필드 오류
    #[error("부품 '{identifier}' 입력 오류 ({field}): {reason}")]
    InvalidInput {
        identifier: String,
        field: &'static str,
        reason: &'static str,
    },
}

impl TcoError {
    pub(crate) fn parameters(field: &'static str, reason: &'static str) -> Self {
        TcoError::InvalidParameters { field, reason }
    }

    pub(crate) fn input(identifier: &str, field: &'static str, reason: &'static str) -> Self {
        TcoError::InvalidInput {
            identifier: identifier.to_string(),
            field,
            reason,
        }
    }
}
