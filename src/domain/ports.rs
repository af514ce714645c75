use crate::utils::error::Result;

/// 查詢結果的輸出位置（本地檔案或測試用記憶體）
pub trait Storage: Send + Sync {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}
