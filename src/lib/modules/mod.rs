pub mod nfdrs;
