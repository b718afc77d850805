pub mod stage1_parse;
pub mod stage2_score;
pub mod stage3_report;
