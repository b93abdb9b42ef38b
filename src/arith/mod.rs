// 128비트 값을 구성하는 워드 단위 연산 계층입니다.
pub mod wide_arith;
pub mod words;

pub(crate) mod division;
pub(crate) mod multiply;
