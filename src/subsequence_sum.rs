use std::cmp::max;

/// Largest sum over the contiguous windows of `a`; at least 0, since the
/// empty window always counts. Tries every window and sums it from scratch.
pub fn max_sub_sum_cubic(a: &[i32]) -> i32 {
    let mut max_sum = 0;
    for i in 0..a.len() {
        for j in i..a.len() {
            let this_sum: i32 = a[i..=j].iter().sum();
            if this_sum > max_sum {
                max_sum = this_sum;
            }
        }
    }
    max_sum
}

/// Carries a running sum across the inner loop instead of re-summing.
pub fn max_sub_sum_quadratic(a: &[i32]) -> i32 {
    let mut max_sum = 0;
    for i in 0..a.len() {
        let mut this_sum = 0;
        for &v in &a[i..] {
            this_sum += v;
            if this_sum > max_sum {
                max_sum = this_sum;
            }
        }
    }
    max_sum
}

/// Recursive halving: the best window sits in one half or spans the split,
/// where it is a best left suffix glued to a best right prefix.
pub fn max_sub_sum_divide_and_conquer(a: &[i32]) -> i32 {
    if a.is_empty() {
        return 0;
    }
    if a.len() == 1 {
        return max(a[0], 0);
    }
    let (lo, hi) = a.split_at(a.len() / 2);
    let spanning = max_border_sum(lo.iter().rev().copied()) + max_border_sum(hi.iter().copied());
    max(
        max(
            max_sub_sum_divide_and_conquer(lo),
            max_sub_sum_divide_and_conquer(hi),
        ),
        spanning,
    )
}

// best sum of a prefix of `values`, never below the empty prefix
fn max_border_sum(values: impl Iterator<Item = i32>) -> i32 {
    let mut best = 0;
    let mut sum = 0;
    for v in values {
        sum += v;
        if sum > best {
            best = sum;
        }
    }
    best
}

/// Kadane's single pass: extend the current run, reset it once it drops
/// below zero.
pub fn max_sub_sum_linear(a: &[i32]) -> i32 {
    let mut max_sum = 0;
    let mut this_sum = 0;
    for &v in a {
        this_sum += v;
        if this_sum > max_sum {
            max_sum = this_sum;
        } else if this_sum < 0 {
            this_sum = 0;
        }
    }
    max_sum
}
