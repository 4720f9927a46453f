use chrono::{DateTime, Duration, Utc};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use noaa_sunrise::noaa;
use std::hint::black_box;

fn benchmark_single_calculation(c: &mut Criterion) {
    let datetime = "2024-06-20T16:00:00Z".parse::<DateTime<Utc>>().unwrap();
    let lat = 42.4;
    let lon = -71.1;

    c.bench_function("sunrise_single", |b| {
        b.iter(|| noaa::sunrise(black_box(datetime), black_box(lat), black_box(lon)).unwrap())
    });

    c.bench_function("sun_events_for_day_single", |b| {
        b.iter(|| {
            noaa::sun_events_for_day(black_box(datetime), black_box(lat), black_box(lon)).unwrap()
        })
    });

    c.bench_function("sun_events_utc_single", |b| {
        b.iter(|| {
            noaa::sun_events_utc(
                black_box(2024),
                black_box(6),
                black_box(20),
                black_box(lat),
                black_box(lon),
            )
            .unwrap()
        })
    });
}

fn benchmark_individual_vs_combined(c: &mut Criterion) {
    let mut group = c.benchmark_group("individual_vs_combined");

    let base_datetime = "2024-01-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
    let lat = 42.4;
    let lon = -71.1;

    for &count in &[365_u64, 3650] {
        group.throughput(Throughput::Elements(count));

        let datetimes: Vec<DateTime<Utc>> = (0..count)
            .map(|i| base_datetime + Duration::days(i as i64))
            .collect();

        // three noon searches per day
        group.bench_with_input(BenchmarkId::new("individual", count), &count, |b, _| {
            b.iter(|| {
                for &dt in &datetimes {
                    let _sunrise = noaa::sunrise(black_box(dt), lat, lon).unwrap();
                    let _noon = noaa::solar_noon(black_box(dt), lon).unwrap();
                    let _sunset = noaa::sunset(black_box(dt), lat, lon).unwrap();
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("combined", count), &count, |b, _| {
            b.iter(|| {
                for &dt in &datetimes {
                    let _result = noaa::sun_events_for_day(black_box(dt), lat, lon).unwrap();
                }
            })
        });
    }

    group.finish();
}

fn benchmark_latitude_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("latitude_sweep");

    let datetime = "2024-06-21T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
    // includes polar day and polar night latitudes
    let latitudes: Vec<f64> = (-89..=89).map(f64::from).collect();
    group.throughput(Throughput::Elements(latitudes.len() as u64));

    group.bench_function("sun_events_for_day", |b| {
        b.iter(|| {
            for &lat in &latitudes {
                let _result = noaa::sun_events_for_day(black_box(datetime), lat, 0.0).unwrap();
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_calculation,
    benchmark_individual_vs_combined,
    benchmark_latitude_sweep
);

criterion_main!(benches);
