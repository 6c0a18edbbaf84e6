pub mod u101_importar_planilha;
