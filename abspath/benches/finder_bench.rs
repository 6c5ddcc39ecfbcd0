use abspath::probe::EntryKind;
use abspath::{AbsPath, Control, TemporaryDirectory};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Lays out `width` directories per level, `depth` levels deep, with a few
/// files in each directory.
fn build_tree(width: usize, depth: usize) -> TemporaryDirectory {
    fn fill(dir: &AbsPath, width: usize, depth: usize) {
        for name in ["a.rs", "b.txt", "c.tar.gz"] {
            dir.join(name).touch().unwrap();
        }
        if depth == 0 {
            return;
        }
        for i in 0..width {
            let child = dir.join(format!("dir{i}")).mkdir().unwrap();
            fill(&child, width, depth - 1);
        }
    }

    let tmp = TemporaryDirectory::new().unwrap();
    fill(tmp.path(), width, depth);
    tmp
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");

    for (width, depth) in [(4usize, 2usize), (4, 4), (8, 3)] {
        let tmp = build_tree(width, depth);
        let root = tmp.path().clone();
        let id = format!("{width}x{depth}");

        group.bench_with_input(BenchmarkId::new("all", &id), &root, |b, root| {
            b.iter(|| black_box(root).find().count());
        });

        group.bench_with_input(BenchmarkId::new("rust_files", &id), &root, |b, root| {
            b.iter(|| {
                black_box(root)
                    .find()
                    .kind(EntryKind::File)
                    .extension("rs")
                    .count()
            });
        });

        group.bench_with_input(BenchmarkId::new("max_depth_1", &id), &root, |b, root| {
            b.iter(|| black_box(root).find().max_depth(1).count());
        });

        group.bench_with_input(BenchmarkId::new("skip_all_dirs", &id), &root, |b, root| {
            b.iter(|| {
                let mut n = 0;
                black_box(root).find().execute(|entry| {
                    n += 1;
                    if entry.is_dir() {
                        Control::Skip
                    } else {
                        Control::Continue
                    }
                });
                n
            });
        });
    }

    group.finish();
}

fn bench_ls(c: &mut Criterion) {
    let tmp = build_tree(16, 1);
    let root = tmp.path().clone();

    c.bench_function("ls", |b| {
        b.iter(|| black_box(&root).ls().unwrap().len());
    });
}

criterion_group!(benches, bench_find, bench_ls);
criterion_main!(benches);
