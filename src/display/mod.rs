pub mod html;
pub mod icons;
pub mod output;
