pub mod qst;
