#![feature(test)]

extern crate test;

use test::Bencher;
use wordle_knowledge::LetterResult::*;
use wordle_knowledge::*;

#[bench]
fn bench_knowledge_update_mixed(b: &mut Bencher) {
    let results = [Absent, Correct, Absent, Present, Absent];

    b.iter(|| {
        let mut knowledge = Knowledge::new();
        knowledge.update("crate", &results);
        knowledge
    });
}

#[bench]
fn bench_knowledge_update_repeated_letters(b: &mut Bencher) {
    let results = [Present, Absent, Present, Absent, Absent];

    b.iter(|| {
        let mut knowledge = Knowledge::new();
        knowledge.update("sassy", &results);
        knowledge
    });
}

#[bench]
fn bench_knowledge_is_satisfied_by_mixed(b: &mut Bencher) {
    let mut knowledge = Knowledge::new();
    knowledge.update("crate", &[Absent, Correct, Absent, Present, Absent]);

    b.iter(|| {
        knowledge.is_satisfied_by("trust")
            | knowledge.is_satisfied_by("tripe")
            | knowledge.is_satisfied_by("write")
            | knowledge.is_satisfied_by("bayou")
            | knowledge.is_satisfied_by("zzzzz")
    });
}

#[bench]
fn bench_knowledge_is_satisfied_by_empty(b: &mut Bencher) {
    let knowledge = Knowledge::new();

    b.iter(|| knowledge.is_satisfied_by("trust"));
}
