use balsa::avl_tree::AvlTree;
use balsa::subsequence_sum::*;

fn balanced_tree() {
    let mut tree = AvlTree::new();
    for v in [2, 1, 3, 4, 5, 6, 7, 15, 16, 14, 13, 12, 11, 10, 9, 8] {
        tree.insert(v);
    }
    println!(
        "tree with {} elements, height {}, min {:?}:",
        tree.len(),
        tree.height(),
        tree.min()
    );
    print!("{}", tree.render());

    tree.remove(&7);
    tree.remove(&16);
    println!("\nafter removing 7 and 16, height {}:", tree.height());
    print!("{}", tree.render());
}

fn subsequence_sums() {
    let a = [-2, 11, -4, 13, -5, -2];
    println!("\nmax subsequence sum of {:?}:", a);
    println!("cubic:              {}", max_sub_sum_cubic(&a));
    println!("quadratic:          {}", max_sub_sum_quadratic(&a));
    println!("divide and conquer: {}", max_sub_sum_divide_and_conquer(&a));
    println!("linear:             {}", max_sub_sum_linear(&a));
}

pub fn main() {
    balanced_tree();
    subsequence_sums();
}
