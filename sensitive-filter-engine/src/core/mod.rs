mod flags;
mod node;
mod word;

// 导出常用项
pub use flags::WordFlags;
pub use node::Node;
pub use word::Word;
