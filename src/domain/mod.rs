// Domain layer: API data model, enumerations and ports (interfaces).
// 不依賴具體的 HTTP 實作。

pub mod enums;
pub mod model;
pub mod ports;
