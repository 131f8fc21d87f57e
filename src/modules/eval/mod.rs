//! Evaluation of Bezier curves of any degree
//!
//! - [de Casteljau](de_casteljau/index.html) - point and derivative evaluation by repeated interpolation

pub mod de_casteljau;
