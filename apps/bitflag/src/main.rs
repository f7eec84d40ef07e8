#![allow(clippy::print_stdout)]

use primer::domain::flags::{Channel, render, render_list};

fn main() {
    let all = [Channel::ACTIVE, Channel::SEND, Channel::RECEIVE];

    println!("{}", Channel::ACTIVE | Channel::SEND);
    for flag in all {
        println!("{flag}");
    }
    println!("{}", Channel::empty());
    println!("{}", render_list(&all));
    println!("{}", Channel::ACTIVE | Channel::RECEIVE);
    println!("{}", render(7));
}
