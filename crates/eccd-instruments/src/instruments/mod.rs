pub mod eccd_checklist;
