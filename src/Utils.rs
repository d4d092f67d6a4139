/// Output collaborators of a simulation run: console report and data file
pub mod series_output;
/// gnuplot script writing and gnuplot start
pub mod gnuplot_output;
