use querylog_macros::value_object;

#[value_object(hash = true, hash = false)]
struct Peer {
    address: String,
}

fn main() {}
