use std::fmt::Write as _;

use chromatch_rs::retrieval::raster::quantize::reduce_depth;
use chromatch_rs::retrieval::search::rank_matches;
use chromatch_rs::retrieval::{
    ColorHistogram, DatasetEntry, HistogramSource, PlainTextReader, RasterReader, Result,
    SearchConfig, SimilaritySearchPipeline,
};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn generate_image_text(width: usize, height: usize) -> Vec<u8> {
    let mut text = String::new();
    writeln!(text, "P3\n# generated\n{width} {height}\n255").unwrap();
    for y in 0..height {
        for x in 0..width {
            let value = (x + y) % 256;
            write!(text, "{value} {value} {value} ").unwrap();
        }
        text.push('\n');
    }
    text.into_bytes()
}

fn raw_histogram(image_text: &[u8], bin_bits: u32) -> ColorHistogram {
    let mut image = PlainTextReader.read_raster(image_text).unwrap();
    reduce_depth(&mut image, bin_bits).unwrap();
    ColorHistogram::from_image(&image, bin_bits).unwrap()
}

fn benchmark_query_histogram_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_histogram_by_size");

    let sizes = vec![
        (64, 64, "64x64"),
        (128, 128, "128x128"),
        (256, 256, "256x256"),
    ];

    for (width, height, label) in sizes {
        let image_text = generate_image_text(width, height);

        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &image_text,
            |b, data| {
                let config = SearchConfig::default();
                let pipeline = SimilaritySearchPipeline::new(config);

                b.iter(|| {
                    let _ = pipeline.query_histogram(black_box(data));
                });
            },
        );
    }

    group.finish();
}

fn benchmark_bin_depths(c: &mut Criterion) {
    let mut group = c.benchmark_group("bin_depth_impact");
    let image_text = generate_image_text(128, 128);

    for bin_bits in [1u32, 2, 3, 4, 5] {
        group.bench_with_input(
            BenchmarkId::from_parameter(bin_bits),
            &image_text,
            |b, data| {
                let config = SearchConfig::builder().bin_bits(bin_bits).build();
                let pipeline = SimilaritySearchPipeline::new(config);

                b.iter(|| {
                    let _ = pipeline.query_histogram(black_box(data));
                });
            },
        );
    }

    group.finish();
}

fn benchmark_rank_dataset_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_by_dataset_size");

    let mut query = raw_histogram(&generate_image_text(64, 64), 3);
    query.normalize().unwrap();

    for dataset_size in [10usize, 100, 500] {
        let dataset: Vec<(String, ColorHistogram)> = (0..dataset_size)
            .map(|i| (format!("entry-{i}.txt"), query.clone()))
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(dataset_size),
            &dataset,
            |b, entries| {
                b.iter(|| {
                    let _ = rank_matches(black_box(&query), entries, 5);
                });
            },
        );
    }

    group.finish();
}

fn benchmark_full_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_search");

    struct PreparedSource {
        histogram: ColorHistogram,
    }

    impl HistogramSource for PreparedSource {
        fn load(&self, _bin_bits: u32) -> Result<ColorHistogram> {
            Ok(self.histogram.clone())
        }
    }

    let pipeline = SimilaritySearchPipeline::new(SearchConfig::default());
    let query_text = generate_image_text(64, 64);
    let base = raw_histogram(&query_text, 3);

    let dataset: Vec<DatasetEntry> = (0..100)
        .map(|i| {
            DatasetEntry::new(
                format!("entry-{i}.txt"),
                Box::new(PreparedSource {
                    histogram: base.clone(),
                }),
            )
        })
        .collect();

    group.bench_function("100_entries", |b| {
        b.iter(|| {
            let _ = pipeline.search(black_box(&query_text), &dataset);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_query_histogram_sizes,
    benchmark_bin_depths,
    benchmark_rank_dataset_sizes,
    benchmark_full_search
);
criterion_main!(benches);
