pub mod cmake_generator;
