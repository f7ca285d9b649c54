//! # 批量执行器
//!
//! 并行执行相互独立的渲染任务。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代
//! - 进度条显示
//! - 结果按输入顺序返回，与完成顺序无关
//!
//! ## 依赖关系
//! - 被 `commands/page.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::{Result, SlipvizError};
use crate::utils::progress;

use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// 批量处理结果统计
#[derive(Debug)]
pub struct BatchResult<R> {
    /// 与输入一一对应的结果
    pub outputs: Vec<Result<R>>,
    /// 成功数量
    pub success: usize,
    /// 失败数量
    pub failed: usize,
}

impl<R> BatchResult<R> {
    /// 全部成功时取出结果，否则返回第一个错误
    pub fn into_outputs(self) -> Result<Vec<R>> {
        self.outputs.into_iter().collect()
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行处理任务列表
    pub fn run<T, R, F>(&self, items: Vec<T>, message: &str, processor: F) -> Result<BatchResult<R>>
    where
        T: Send,
        R: Send,
        F: Fn(T) -> Result<R> + Sync + Send,
    {
        let pb = progress::create_progress_bar(items.len() as u64, message);
        let failed_count = AtomicUsize::new(0);

        // 配置 rayon 线程池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| SlipvizError::InvalidArgument(format!("thread pool: {}", e)))?;

        let outputs: Vec<Result<R>> = pool.install(|| {
            items
                .into_par_iter()
                .map(|item| {
                    let result = processor(item);
                    if result.is_err() {
                        failed_count.fetch_add(1, Ordering::Relaxed);
                    }
                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();

        let failed = failed_count.into_inner();
        Ok(BatchResult {
            success: outputs.len() - failed,
            failed,
            outputs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runner_keeps_input_order() {
        let runner = BatchRunner::new(4);
        let result = runner
            .run((0..32).collect(), "test", |i: i32| Ok(i * 2))
            .unwrap();
        assert_eq!(result.success, 32);
        assert_eq!(result.failed, 0);
        let outputs = result.into_outputs().unwrap();
        assert_eq!(outputs, (0..32).map(|i| i * 2).collect::<Vec<_>>());
    }

    #[test]
    fn test_runner_counts_failures() {
        let runner = BatchRunner::new(2);
        let result = runner
            .run(vec![1, 2, 3], "test", |i: i32| {
                if i == 2 {
                    Err(SlipvizError::InvalidArgument("two".to_string()))
                } else {
                    Ok(i)
                }
            })
            .unwrap();
        assert_eq!(result.success, 2);
        assert_eq!(result.failed, 1);
        assert!(result.into_outputs().is_err());
    }

    #[test]
    fn test_auto_jobs() {
        assert!(BatchRunner::new(0).jobs() >= 1);
        assert_eq!(BatchRunner::new(3).jobs(), 3);
    }
}
