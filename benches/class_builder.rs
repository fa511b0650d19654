use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lib::{ClassBuilder, ClassConst, ClassMethod, Node, Property, TraitUse};

fn members(n: usize) -> Vec<Node> {
    (0..n)
        .map(|i| match i % 4 {
            0 => ClassMethod::public(format!("method{}", i)).into(),
            1 => Property::public(format!("property{}", i)).into(),
            2 => ClassConst::single(format!("CONST{}", i), i as i64).into(),
            _ => TraitUse::new([format!("Trait{}", i)]).into(),
        })
        .collect()
}

fn class_builder(c: &mut Criterion) {
    let mut group = c.benchmark_group("class_builder");
    group.sample_size(50);

    for n in [10, 100, 1000] {
        let members = members(n);
        group.bench_function(format!("add and build {} members", n), |b| {
            b.iter(|| {
                let mut builder = ClassBuilder::new("Foo");
                builder.extend("Bar").implement(["Countable"]);
                let class = builder
                    .add_members(members.iter().cloned())
                    .map(|builder| builder.build());
                black_box(class)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, class_builder);
criterion_main!(benches);
