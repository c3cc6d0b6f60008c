use querylog_macros::value_object;

#[value_object(debug = 1)]
struct Peer {
    address: String,
}

fn main() {}
