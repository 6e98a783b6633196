//! 成绩统计引擎
//!
//! 纯函数，按需计算，结果不落库也不进缓存。

use crate::models::stats::entities::GradeStats;

/// 对一组分数做统计汇总
///
/// 输入为空时返回全空结果（count 为 0）。排序在拷贝上进行，
/// 输入切片不被修改，结果与输入顺序无关。平均值不做展示舍入。
pub fn compute_stats(values: &[f64]) -> GradeStats {
    if values.is_empty() {
        return GradeStats::empty();
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let count = sorted.len();
    let sum: f64 = sorted.iter().sum();
    let average = sum / count as f64;

    // 偶数个取中间两数的均值，奇数个取中间数
    let median = if count % 2 == 0 {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    } else {
        sorted[count / 2]
    };

    GradeStats {
        average: Some(average),
        median: Some(median),
        lowest: Some(sorted[0]),
        highest: Some(sorted[count - 1]),
        count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_dataset() {
        let stats = compute_stats(&[10.0, 15.0, 12.0, 8.0, 16.0]);
        assert_eq!(stats.count, 5);
        assert_eq!(stats.lowest, Some(8.0));
        assert_eq!(stats.highest, Some(16.0));
        assert_eq!(stats.median, Some(12.0));
        let avg = stats.average.unwrap();
        assert!((avg - 12.2).abs() < 1e-9);
    }

    #[test]
    fn test_even_count_median() {
        let stats = compute_stats(&[10.0, 12.0, 14.0, 16.0]);
        assert_eq!(stats.median, Some(13.0));
    }

    #[test]
    fn test_odd_count_median() {
        let stats = compute_stats(&[10.0, 12.0, 14.0]);
        assert_eq!(stats.median, Some(12.0));
    }

    #[test]
    fn test_empty_input() {
        let stats = compute_stats(&[]);
        assert_eq!(stats, GradeStats::empty());
        assert_eq!(stats.count, 0);
        assert_eq!(stats.average, None);
        assert_eq!(stats.median, None);
        assert_eq!(stats.lowest, None);
        assert_eq!(stats.highest, None);
    }

    #[test]
    fn test_single_value() {
        let stats = compute_stats(&[17.5]);
        assert_eq!(stats.count, 1);
        assert_eq!(stats.average, Some(17.5));
        assert_eq!(stats.median, Some(17.5));
        assert_eq!(stats.lowest, Some(17.5));
        assert_eq!(stats.highest, Some(17.5));
    }

    #[test]
    fn test_permutation_invariance() {
        let a = compute_stats(&[10.0, 15.0, 12.0, 8.0, 16.0]);
        let b = compute_stats(&[16.0, 8.0, 12.0, 15.0, 10.0]);
        let c = compute_stats(&[8.0, 10.0, 12.0, 15.0, 16.0]);
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_bounds_ordering() {
        let values = [3.25, 19.0, 0.0, 11.5, 7.75, 14.0];
        let stats = compute_stats(&values);
        let lowest = stats.lowest.unwrap();
        let highest = stats.highest.unwrap();
        let average = stats.average.unwrap();
        let median = stats.median.unwrap();
        assert!(lowest <= average && average <= highest);
        assert!(lowest <= median && median <= highest);
        assert_eq!(stats.count, values.len());
    }

    #[test]
    fn test_input_not_modified() {
        let values = [16.0, 8.0, 12.0];
        let _ = compute_stats(&values);
        assert_eq!(values, [16.0, 8.0, 12.0]);
    }
}
