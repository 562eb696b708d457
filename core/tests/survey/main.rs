
mod breadth_first;
mod report;
