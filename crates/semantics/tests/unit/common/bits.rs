//! Sign-extension helper tests.

use rvsem_core::common::{sext8, sext12, sext16, sext32};

#[test]
fn sext_helpers_replicate_the_top_bit() {
    assert_eq!(sext8(0x80), 0xFFFF_FFFF_FFFF_FF80);
    assert_eq!(sext8(0x17F), 0x7F);
    assert_eq!(sext16(0x8000), 0xFFFF_FFFF_FFFF_8000);
    assert_eq!(sext32(0xFFFF_FFFF), u64::MAX);
    assert_eq!(sext32(0x1_0000_0000), 0);
}

#[test]
fn sext12_covers_the_immediate_range() {
    assert_eq!(sext12(0x7FF), 2047);
    assert_eq!(sext12(0x800), -2048i64 as u64);
    assert_eq!(sext12(0xFFF), u64::MAX);
    assert_eq!(sext12(0x1001), 1);
}
