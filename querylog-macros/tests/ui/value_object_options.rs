use querylog_macros::value_object;
use std::collections::HashSet;

// default = false：必填字段不应有默认值
#[value_object(default = false, hash = true)]
struct Peer {
    address: String,
    host: Option<String>,
}

// 已有的 derive 与宏追加的派生合并去重
#[value_object(hash = true)]
#[derive(Clone, Serialize, PartialOrd, Ord)]
struct Port(u16);

#[allow(unused_imports)]
use serde::Serialize;

fn main() {
    let mut set = HashSet::new();
    set.insert(Peer {
        address: "10.0.0.5".to_string(),
        host: None,
    });
    set.insert(Peer {
        address: "10.0.0.5".to_string(),
        host: None,
    });
    assert_eq!(set.len(), 1);

    let _ = format!("{:?}", Port::default());
    assert!(Port(80) < Port(443));
}
