use querylog_macros::value_object;

#[value_object(hashh = true)]
struct Peer {
    address: String,
}

fn main() {}
