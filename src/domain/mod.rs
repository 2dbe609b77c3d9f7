//! Domain layer
//! 프로브/재설정 규칙(값 객체, 판정, 단계)을 외부 시스템과 무관하게 표현한다.

pub mod probe;
pub mod reset;
