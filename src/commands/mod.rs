pub mod pdf_images;
pub mod pdf_toc;
pub mod word_data;
pub mod word_sections;
pub mod word_toc;
