pub mod avl_tree;
pub mod subsequence_sum;
