pub mod temp_audio;
