//! # Domain Entities
//!
//! MongoDB에 영구 저장되는 도메인 엔티티들을 정의합니다.
//! 엔티티는 `serde`로 BSON 문서와 상호 변환되며, `_id`는 저장 시점에 할당됩니다.
//!
//! ## 주의사항
//!
//! - **민감 정보**: 엔티티를 그대로 응답하지 말고 DTO로 변환해서 내보냅니다.
//! - **유일성**: `user_name`은 서비스 계층의 중복 검사와 저장소 인덱스로 보호됩니다.

pub mod users;
