//! Localized (Thai) copy for callback failures.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

/// Code used when the hub answers the exchange without a usable session.
pub const TOKEN_EXCHANGE_FAILED: &str = "token_exchange_failed";

/// Code used when the exchange request itself fails.
pub const CALLBACK_FAILED: &str = "callback_failed";

pub const RETRY_LABEL: &str = "ลองเข้าสู่ระบบอีกครั้ง";
pub const HOME_LABEL: &str = "กลับหน้าหลัก";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorMessage {
    pub title: &'static str,
    pub body: String,
}

/// Message for an error code; unknown codes get a generic message that
/// names the code.
pub fn callback_error_message(code: &str) -> ErrorMessage {
    let known = |title: &'static str, body: &str| ErrorMessage { title, body: body.to_owned() };
    match code {
        "access_denied" => known(
            "การเข้าถึงถูกปฏิเสธ",
            "คุณไม่ได้อนุญาตให้เข้าถึง หรือบัญชีนี้ไม่มีสิทธิ์ใช้งานแอปพลิเคชันนี้",
        ),
        "invalid_request" => known("คำขอไม่ถูกต้อง", "คำขอเข้าสู่ระบบไม่ถูกต้อง กรุณาลองใหม่อีกครั้ง"),
        "unauthorized_client" => known("แอปพลิเคชันไม่ได้รับอนุญาต", "แอปพลิเคชันนี้ยังไม่ได้รับอนุญาตให้ใช้การเข้าสู่ระบบ"),
        "expired_grant" => known(
            "รหัสยืนยันหมดอายุ",
            "รหัสยืนยันหมดอายุหรือถูกใช้งานไปแล้ว กรุณาเข้าสู่ระบบใหม่อีกครั้ง",
        ),
        "invalid_grant" => known("รหัสยืนยันไม่ถูกต้อง", "รหัสยืนยันไม่ถูกต้อง กรุณาเข้าสู่ระบบใหม่อีกครั้ง"),
        "server_error" | "temporarily_unavailable" => known(
            "ระบบยืนยันตัวตนขัดข้อง",
            "ระบบยืนยันตัวตนไม่สามารถให้บริการได้ในขณะนี้ กรุณาลองใหม่ภายหลัง",
        ),
        TOKEN_EXCHANGE_FAILED => known("เข้าสู่ระบบไม่สำเร็จ", "ไม่สามารถแลกเปลี่ยนรหัสยืนยันกับระบบยืนยันตัวตนได้"),
        CALLBACK_FAILED => known(
            "การเชื่อมต่อล้มเหลว",
            "ไม่สามารถติดต่อระบบยืนยันตัวตนได้ กรุณาตรวจสอบการเชื่อมต่อแล้วลองใหม่",
        ),
        other => ErrorMessage {
            title: "เข้าสู่ระบบไม่สำเร็จ",
            body: format!("เกิดข้อผิดพลาดระหว่างเข้าสู่ระบบ (รหัส: {other})"),
        },
    }
}
