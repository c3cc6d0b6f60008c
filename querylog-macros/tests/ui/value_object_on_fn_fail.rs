use querylog_macros::value_object;

#[value_object]
fn helper() {}

fn main() {}
