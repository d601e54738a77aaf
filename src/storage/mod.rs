// Storage 模块 - 持久化表示
//
// 模型对象与 JSON 存储之间的适配层

mod json_adapted_tag;

pub use json_adapted_tag::JsonAdaptedTag;
