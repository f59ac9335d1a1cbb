use rlv_types::Hash256;

use crate::hasher::ContentHasher;

/// Binary Merkle root over a list of leaf hashes.
///
/// An empty list produces the zero hash. A single leaf is its own root. An
/// odd node at any level is paired with itself.
pub fn merkle_root(leaves: &[Hash256]) -> Hash256 {
    if leaves.is_empty() {
        return Hash256::zero();
    }

    let mut current = leaves.to_vec();
    while current.len() > 1 {
        current = current
            .chunks(2)
            .map(|pair| match pair {
                [left, right] => hash_pair(left, right),
                [single] => hash_pair(single, single),
                _ => unreachable!("chunks(2) yields one or two elements"),
            })
            .collect();
    }
    current[0]
}

fn hash_pair(left: &Hash256, right: &Hash256) -> Hash256 {
    let mut node = [0u8; 64];
    node[..32].copy_from_slice(left.as_bytes());
    node[32..].copy_from_slice(right.as_bytes());
    ContentHasher::MERKLE_NODE.hash(&node)
}
