use crate::models::ErrorCode;

/// 违反 ID 规则的原因，对应提示头中的错误键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdViolation {
    /// 创建时请求体带了 ID
    IdExists,
    /// 更新时请求体缺少 ID
    IdNull,
    /// 请求体 ID 与路径 ID 不一致
    IdInvalid,
    /// 要更新的记录不存在
    IdNotFound,
    /// 报价引用的拍卖不存在
    AuctionNotFound,
}

impl IdViolation {
    pub fn error_key(&self) -> &'static str {
        match self {
            IdViolation::IdExists => "idexists",
            IdViolation::IdNull => "idnull",
            IdViolation::IdInvalid => "idinvalid",
            IdViolation::IdNotFound => "idnotfound",
            IdViolation::AuctionNotFound => "auctionnotfound",
        }
    }

    pub fn message(&self, entity_name: &str) -> String {
        match self {
            IdViolation::IdExists => format!("A new {entity_name} cannot already have an ID"),
            IdViolation::IdNull => "Invalid id".to_string(),
            IdViolation::IdInvalid => "Invalid ID".to_string(),
            IdViolation::IdNotFound => "Entity not found".to_string(),
            IdViolation::AuctionNotFound => "Referenced auction not found".to_string(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            IdViolation::IdExists => ErrorCode::IdExists,
            IdViolation::IdNull => ErrorCode::IdNull,
            IdViolation::IdInvalid => ErrorCode::IdInvalid,
            IdViolation::IdNotFound => ErrorCode::IdNotFound,
            IdViolation::AuctionNotFound => ErrorCode::OfferAuctionNotFound,
        }
    }
}

/// 新建的记录不能携带 ID
pub fn validate_new_id(id: Option<i64>) -> Result<(), IdViolation> {
    match id {
        Some(_) => Err(IdViolation::IdExists),
        None => Ok(()),
    }
}

/// 更新时请求体 ID 必须存在且与路径 ID 一致
pub fn validate_update_id(path_id: i64, body_id: Option<i64>) -> Result<(), IdViolation> {
    match body_id {
        None => Err(IdViolation::IdNull),
        Some(id) if id != path_id => Err(IdViolation::IdInvalid),
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_id_must_be_absent() {
        assert_eq!(validate_new_id(None), Ok(()));
        assert_eq!(validate_new_id(Some(1)), Err(IdViolation::IdExists));
        assert_eq!(validate_new_id(Some(0)), Err(IdViolation::IdExists));
    }

    #[test]
    fn test_update_id_rules() {
        assert_eq!(validate_update_id(5, Some(5)), Ok(()));
        assert_eq!(validate_update_id(5, None), Err(IdViolation::IdNull));
        assert_eq!(validate_update_id(5, Some(6)), Err(IdViolation::IdInvalid));
    }

    #[test]
    fn test_error_keys_and_messages() {
        assert_eq!(IdViolation::IdExists.error_key(), "idexists");
        assert_eq!(
            IdViolation::IdExists.message("auction"),
            "A new auction cannot already have an ID"
        );
        assert_eq!(IdViolation::IdNotFound.message("offer"), "Entity not found");
        assert_eq!(IdViolation::IdInvalid.code(), ErrorCode::IdInvalid);
        assert_eq!(
            IdViolation::AuctionNotFound.code(),
            ErrorCode::OfferAuctionNotFound
        );
    }
}
