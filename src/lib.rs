#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use pk_cfg as cfg;
pub use pk_persist as persist;
pub use pk_utils as utils;
