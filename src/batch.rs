//! Concurrent rendering of several mock-ups.

use crate::compositor::{self, RenderConfig};
use crate::draw::TextMeasurer;
use crate::error::{RenderError, Result};
use crate::output::RasterImage;
use crate::source::SourceImage;
use std::sync::Arc;
use tokio::task;

/// One render in a batch.
#[derive(Debug, Clone)]
pub struct RenderJob {
    pub config: RenderConfig,
    pub image: Arc<SourceImage>,
}

impl RenderJob {
    pub fn new(config: RenderConfig, image: Arc<SourceImage>) -> Self {
        Self { config, image }
    }
}

/// Renders every job on its own blocking worker.
///
/// Cairo and Pango objects are not shared between threads: each worker
/// creates its own measurer with `make_measurer` and its own surface. The
/// results are returned in job order.
pub async fn render_batch<F, M>(jobs: Vec<RenderJob>, make_measurer: F) -> Vec<Result<RasterImage>>
where
    F: Fn() -> Result<M> + Send + Sync + 'static,
    M: TextMeasurer,
{
    let make_measurer = Arc::new(make_measurer);
    log::info!("Rendering batch of {} mock-ups", jobs.len());

    let handles: Vec<_> = jobs
        .into_iter()
        .enumerate()
        .map(|(index, job)| {
            let make_measurer = Arc::clone(&make_measurer);
            task::spawn_blocking(move || {
                log::debug!("Batch job {} started", index + 1);
                let measurer = make_measurer()?;
                compositor::render(&job.config, &job.image, &measurer)
            })
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        let result = handle
            .await
            .map_err(|e| RenderError::Task(e.to_string()))
            .and_then(|result| result);
        if let Err(e) = &result {
            log::error!("Batch render failed: {}", e);
        }
        results.push(result);
    }
    results
}

/// Runs [`render_batch`] on a fresh multi-threaded runtime.
pub fn render_batch_blocking<F, M>(
    jobs: Vec<RenderJob>,
    make_measurer: F,
) -> Result<Vec<Result<RasterImage>>>
where
    F: Fn() -> Result<M> + Send + Sync + 'static,
    M: TextMeasurer,
{
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(render_batch(jobs, make_measurer)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device;
    use crate::draw::FixedAdvanceMeasurer;

    fn job(color: &str, rgba: [u8; 4]) -> RenderJob {
        let mut config = RenderConfig::for_device(device::lookup("android-phone").unwrap());
        config.canvas_width = 120;
        config.canvas_height = 240;
        config.background_color = color.to_string();
        config.font_family = "sans-serif".to_string();
        RenderJob::new(config, Arc::new(SourceImage::solid(60, 120, rgba)))
    }

    #[tokio::test]
    async fn batch_keeps_job_order() {
        let jobs = vec![
            job("#FF0000", [0, 0, 0, 255]),
            job("#00FF00", [0, 0, 0, 255]),
            job("#0000FF", [0, 0, 0, 255]),
        ];
        let results = render_batch(jobs, || Ok(FixedAdvanceMeasurer::new(5.0))).await;

        let corners: Vec<_> = results
            .into_iter()
            .map(|result| result.unwrap().pixel(0, 0).unwrap())
            .collect();
        assert_eq!(
            corners,
            vec![[255, 0, 0, 255], [0, 255, 0, 255], [0, 0, 255, 255]]
        );
    }

    #[tokio::test]
    async fn batch_matches_single_render() {
        let single = job("#336699", [200, 100, 50, 255]);
        let expected =
            compositor::render(&single.config, &single.image, &FixedAdvanceMeasurer::new(5.0))
                .unwrap();

        let results = render_batch(vec![single.clone(), single], || {
            Ok(FixedAdvanceMeasurer::new(5.0))
        })
        .await;
        for result in results {
            assert_eq!(result.unwrap(), expected);
        }
    }

    #[tokio::test]
    async fn failures_stay_with_their_job() {
        let jobs = vec![job("#123456", [0, 0, 0, 255]), job("nope", [0, 0, 0, 255])];
        let results = render_batch(jobs, || Ok(FixedAdvanceMeasurer::new(5.0))).await;
        assert!(results[0].is_ok());
        assert!(matches!(
            results[1],
            Err(RenderError::MalformedColor { field: "background_color", .. })
        ));
    }

    #[test]
    fn blocking_wrapper_runs_batch() {
        let results =
            render_batch_blocking(vec![job("#000000", [0, 0, 0, 255])], || {
                Ok(FixedAdvanceMeasurer::new(5.0))
            })
            .unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0].is_ok());
    }
}
