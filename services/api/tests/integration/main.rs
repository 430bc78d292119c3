mod helpers;
mod submission_test;
